//! Component template commands.

use anyhow::Result;
use templatectl_client::TemplateClient;
use templatectl_types::ComponentTemplateNode;
use tracing::info;

use crate::args::ComponentTemplateCommands;
use crate::commands::{print_json, read_body};

pub async fn run(client: &TemplateClient, command: ComponentTemplateCommands) -> Result<()> {
    match command {
        ComponentTemplateCommands::Put { name, file } => {
            let body: ComponentTemplateNode = read_body(&file)?;
            let response = client.put_component_template(&name, &body).await?;
            info!(name = %name, acknowledged = response.acknowledged, "put component template");
            print_json(&response)
        }
        ComponentTemplateCommands::Get { name } => {
            let template = client.get_component_template(&name).await?;
            print_json(&template)
        }
        ComponentTemplateCommands::List => {
            let templates = client.list_component_templates().await?;
            print_json(&templates)
        }
        ComponentTemplateCommands::Delete { name } => {
            let response = client.delete_component_template(&name).await?;
            info!(name = %name, acknowledged = response.acknowledged, "deleted component template");
            print_json(&response)
        }
    }
}
