//! Index template commands.

use anyhow::Result;
use templatectl_client::TemplateClient;
use templatectl_types::IndexTemplate;
use tracing::info;

use crate::args::IndexTemplateCommands;
use crate::commands::{print_json, read_body};

pub async fn run(client: &TemplateClient, command: IndexTemplateCommands) -> Result<()> {
    match command {
        IndexTemplateCommands::Put { name, file } => {
            let body: IndexTemplate = read_body(&file)?;
            let response = client.put_index_template(&name, &body).await?;
            info!(name = %name, acknowledged = response.acknowledged, "put index template");
            print_json(&response)
        }
        IndexTemplateCommands::Get { name } => {
            let template = client.get_index_template(&name).await?;
            print_json(&template)
        }
        IndexTemplateCommands::List => {
            let templates = client.list_index_templates().await?;
            print_json(&templates)
        }
        IndexTemplateCommands::Delete { name } => {
            let response = client.delete_index_template(&name).await?;
            info!(name = %name, acknowledged = response.acknowledged, "deleted index template");
            print_json(&response)
        }
    }
}
