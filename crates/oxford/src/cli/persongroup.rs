//! `face persongroup` - person group management.

use clap::{ArgGroup, Args, Subcommand};
use oxford_core::payload::PersonGroupBody;
use oxford_core::{catalog, Call, Oxford, Payload};
use uuid::Uuid;

use super::{print_json, report};

#[derive(Args, Debug)]
pub struct PersonGroupArgs {
    #[command(subcommand)]
    pub command: PersonGroupCommand,
}

#[derive(Subcommand, Debug)]
pub enum PersonGroupCommand {
    /// Create a person group
    Create {
        /// Display name of the group
        name: String,

        /// Id for the new group [default: a random UUID]
        #[arg(long = "persongroupid", env = "OXFORD_FACE_PERSONGROUP_CREATE_PERSONGROUPID")]
        person_group_id: Option<String>,

        /// Free-form data stored with the group
        #[arg(long = "customdata", env = "OXFORD_FACE_PERSONGROUP_CREATE_CUSTOMDATA")]
        custom_data: Option<String>,
    },

    /// List all person groups
    #[command(aliases = ["retrieve-all", "retrieve_all"])]
    List,

    /// Show a person group
    #[command(alias = "retrieve")]
    Get {
        #[arg(value_name = "PERSONGROUPID")]
        person_group_id: String,
    },

    /// List the people in a person group
    #[command(alias = "list_people")]
    ListPeople {
        #[arg(value_name = "PERSONGROUPID")]
        person_group_id: String,
    },

    /// Show the training status of a person group
    #[command(alias = "training_status")]
    TrainingStatus {
        #[arg(value_name = "PERSONGROUPID")]
        person_group_id: String,
    },

    /// Start training a person group
    Train {
        #[arg(value_name = "PERSONGROUPID")]
        person_group_id: String,
    },

    /// Change the name or custom data of a person group
    #[command(group(ArgGroup::new("fields").required(true).multiple(true).args(["name", "custom_data"])))]
    Update {
        #[arg(value_name = "PERSONGROUPID")]
        person_group_id: String,

        /// New display name
        #[arg(long, env = "OXFORD_FACE_PERSONGROUP_UPDATE_NAME")]
        name: Option<String>,

        /// New custom data
        #[arg(long = "customdata", env = "OXFORD_FACE_PERSONGROUP_UPDATE_CUSTOMDATA")]
        custom_data: Option<String>,
    },

    /// Delete a person group and everyone in it
    Delete {
        #[arg(value_name = "PERSONGROUPID")]
        person_group_id: String,
    },
}

fn group(id: impl Into<String>) -> Call {
    Call::new().path_param("personGroupId", id)
}

pub async fn execute(oxford: &Oxford, args: PersonGroupArgs) -> anyhow::Result<()> {
    match args.command {
        PersonGroupCommand::Create {
            name,
            person_group_id,
            custom_data,
        } => {
            let id = person_group_id.unwrap_or_else(|| Uuid::new_v4().to_string());
            let body = PersonGroupBody {
                name: Some(name),
                user_data: custom_data,
            };
            let value = oxford
                .call(
                    &catalog::PERSONGROUP_CREATE,
                    group(&id).payload(Payload::json(&body)?),
                )
                .await?;
            report(&value, format!("Created PersonGroup with id {id}"))
        }
        PersonGroupCommand::List => {
            let groups = oxford.call(&catalog::PERSONGROUP_LIST, Call::new()).await?;
            print_json(&groups)
        }
        PersonGroupCommand::Get { person_group_id } => {
            let value = oxford
                .call(&catalog::PERSONGROUP_GET, group(person_group_id))
                .await?;
            print_json(&value)
        }
        PersonGroupCommand::ListPeople { person_group_id } => {
            let people = oxford
                .call(&catalog::PERSONGROUP_LIST_PEOPLE, group(person_group_id))
                .await?;
            print_json(&people)
        }
        PersonGroupCommand::TrainingStatus { person_group_id } => {
            let status = oxford
                .call(&catalog::PERSONGROUP_TRAINING_STATUS, group(person_group_id))
                .await?;
            print_json(&status)
        }
        PersonGroupCommand::Train { person_group_id } => {
            let value = oxford
                .call(&catalog::PERSONGROUP_TRAIN, group(&person_group_id))
                .await?;
            report(
                &value,
                format!("Started training PersonGroup {person_group_id}"),
            )
        }
        PersonGroupCommand::Update {
            person_group_id,
            name,
            custom_data,
        } => {
            let body = PersonGroupBody {
                name,
                user_data: custom_data,
            };
            let value = oxford
                .call(
                    &catalog::PERSONGROUP_UPDATE,
                    group(&person_group_id).payload(Payload::json(&body)?),
                )
                .await?;
            report(&value, format!("Updated PersonGroup {person_group_id}"))
        }
        PersonGroupCommand::Delete { person_group_id } => {
            let value = oxford
                .call(&catalog::PERSONGROUP_DELETE, group(&person_group_id))
                .await?;
            report(&value, format!("Deleted PersonGroup {person_group_id}"))
        }
    }
}
