//! `face person` - people inside a person group.

use clap::{ArgGroup, Args, Subcommand};
use oxford_core::payload::PersonBody;
use oxford_core::{catalog, Call, Oxford, Payload};

use super::{print_json, report};

#[derive(Args, Debug)]
pub struct PersonArgs {
    /// Person group the person belongs to
    #[arg(long = "persongroupid", global = true, env = "OXFORD_FACE_PERSON_PERSONGROUPID")]
    pub person_group_id: Option<String>,

    #[command(subcommand)]
    pub command: PersonCommand,
}

#[derive(Subcommand, Debug)]
pub enum PersonCommand {
    /// Create a person from detected faces
    Create {
        /// Display name of the person
        name: String,

        /// Face ids from a previous detect
        #[arg(
            long = "faceid",
            env = "OXFORD_FACE_PERSON_CREATE_FACEID",
            required = true,
            num_args = 1..,
            value_delimiter = ',',
            value_name = "FACEID"
        )]
        face_ids: Vec<String>,

        /// Free-form data stored with the person
        #[arg(long = "customdata", env = "OXFORD_FACE_PERSON_CREATE_CUSTOMDATA")]
        custom_data: Option<String>,
    },

    /// Show a person
    #[command(alias = "retrieve")]
    Get {
        #[arg(value_name = "PERSONID")]
        person_id: String,
    },

    /// Change the name, faces, or custom data of a person
    #[command(group(ArgGroup::new("fields").required(true).multiple(true).args(["name", "face_ids", "custom_data"])))]
    Update {
        #[arg(value_name = "PERSONID")]
        person_id: String,

        /// New display name
        #[arg(long, env = "OXFORD_FACE_PERSON_UPDATE_NAME")]
        name: Option<String>,

        /// Replacement face ids
        #[arg(
            long = "faceid",
            env = "OXFORD_FACE_PERSON_UPDATE_FACEID",
            num_args = 1..,
            value_delimiter = ',',
            value_name = "FACEID"
        )]
        face_ids: Vec<String>,

        /// New custom data
        #[arg(long = "customdata", env = "OXFORD_FACE_PERSON_UPDATE_CUSTOMDATA")]
        custom_data: Option<String>,
    },

    /// Delete a person
    Delete {
        #[arg(value_name = "PERSONID")]
        person_id: String,
    },
}

pub async fn execute(oxford: &Oxford, args: PersonArgs) -> anyhow::Result<()> {
    let Some(group_id) = args.person_group_id else {
        anyhow::bail!("--persongroupid is required");
    };
    let group = Call::new().path_param("personGroupId", group_id);

    match args.command {
        PersonCommand::Create {
            name,
            face_ids,
            custom_data,
        } => {
            let body = PersonBody {
                name: Some(name),
                user_data: custom_data,
                face_ids,
            };
            let value = oxford
                .call(
                    &catalog::PERSON_CREATE,
                    group.payload(Payload::json(&body)?),
                )
                .await?;
            match value.get("personId").and_then(|id| id.as_str()) {
                Some(id) => {
                    println!("Created Person with id {id}");
                    Ok(())
                }
                None => print_json(&value),
            }
        }
        PersonCommand::Get { person_id } => {
            let value = oxford
                .call(&catalog::PERSON_GET, group.path_param("personId", person_id))
                .await?;
            print_json(&value)
        }
        PersonCommand::Update {
            person_id,
            name,
            face_ids,
            custom_data,
        } => {
            let body = PersonBody {
                name,
                user_data: custom_data,
                face_ids,
            };
            let value = oxford
                .call(
                    &catalog::PERSON_UPDATE,
                    group
                        .path_param("personId", &person_id)
                        .payload(Payload::json(&body)?),
                )
                .await?;
            report(&value, format!("Updated Person {person_id}"))
        }
        PersonCommand::Delete { person_id } => {
            let value = oxford
                .call(
                    &catalog::PERSON_DELETE,
                    group.path_param("personId", &person_id),
                )
                .await?;
            report(&value, format!("Deleted Person {person_id}"))
        }
    }
}
