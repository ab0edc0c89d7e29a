//! `face personface` - faces registered for a person.

use clap::{Args, Subcommand};
use oxford_core::payload::PersonFaceBody;
use oxford_core::{catalog, Call, Oxford, Payload};

use super::{print_json, report};

/// Addresses one face of one person. Shared by every `personface`
/// command, so the environment names carry the group prefix only.
#[derive(Args, Debug)]
pub struct FaceRef {
    /// Person group the person belongs to
    #[arg(long = "persongroupid", env = "OXFORD_FACE_PERSONFACE_PERSONGROUPID")]
    pub person_group_id: String,

    #[arg(long = "personid", env = "OXFORD_FACE_PERSONFACE_PERSONID")]
    pub person_id: String,

    #[arg(long = "faceid", env = "OXFORD_FACE_PERSONFACE_FACEID")]
    pub face_id: String,
}

impl FaceRef {
    fn call(&self) -> Call {
        Call::new()
            .path_param("personGroupId", &self.person_group_id)
            .path_param("personId", &self.person_id)
            .path_param("faceId", &self.face_id)
    }
}

#[derive(Args, Debug)]
pub struct PersonFaceArgs {
    #[command(subcommand)]
    pub command: PersonFaceCommand,
}

#[derive(Subcommand, Debug)]
pub enum PersonFaceCommand {
    /// Register a detected face for a person
    Add {
        #[command(flatten)]
        face: FaceRef,

        /// Free-form data stored with the face
        #[arg(long = "customdata", env = "OXFORD_FACE_PERSONFACE_ADD_CUSTOMDATA")]
        custom_data: Option<String>,
    },

    /// Show a registered face
    #[command(alias = "retrieve")]
    Get {
        #[command(flatten)]
        face: FaceRef,
    },

    /// Replace the custom data of a registered face
    Update {
        #[command(flatten)]
        face: FaceRef,

        #[arg(long = "customdata", env = "OXFORD_FACE_PERSONFACE_UPDATE_CUSTOMDATA")]
        custom_data: String,
    },

    /// Remove a face from a person
    Delete {
        #[command(flatten)]
        face: FaceRef,
    },
}

pub async fn execute(oxford: &Oxford, args: PersonFaceArgs) -> anyhow::Result<()> {
    match args.command {
        PersonFaceCommand::Add { face, custom_data } => {
            let body = PersonFaceBody {
                user_data: custom_data,
            };
            let value = oxford
                .call(
                    &catalog::PERSONFACE_ADD,
                    face.call().payload(Payload::json(&body)?),
                )
                .await?;
            report(
                &value,
                format!("Added face {} to Person {}", face.face_id, face.person_id),
            )
        }
        PersonFaceCommand::Get { face } => {
            let value = oxford.call(&catalog::PERSONFACE_GET, face.call()).await?;
            print_json(&value)
        }
        PersonFaceCommand::Update { face, custom_data } => {
            let body = PersonFaceBody {
                user_data: Some(custom_data),
            };
            let value = oxford
                .call(
                    &catalog::PERSONFACE_UPDATE,
                    face.call().payload(Payload::json(&body)?),
                )
                .await?;
            report(&value, format!("Updated face {}", face.face_id))
        }
        PersonFaceCommand::Delete { face } => {
            let value = oxford
                .call(&catalog::PERSONFACE_DELETE, face.call())
                .await?;
            report(
                &value,
                format!("Removed face {} from Person {}", face.face_id, face.person_id),
            )
        }
    }
}
