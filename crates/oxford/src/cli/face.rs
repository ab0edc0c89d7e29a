//! The `face` command group.

use clap::{ArgAction, Args, Subcommand};
use oxford_core::config::Overrides;
use oxford_core::payload::{FindSimilarBody, GroupBody, IdentifyBody, VerifyBody};
use oxford_core::{catalog, Call, ImageSource, Oxford, Payload, Service};

use super::person::PersonArgs;
use super::personface::PersonFaceArgs;
use super::persongroup::PersonGroupArgs;
use super::{keys, print_json, Session};

/// Arguments for the face command.
#[derive(Args, Debug)]
pub struct FaceArgs {
    /// Face API subscription key (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "OXFORD_FACE_APIKEY",
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub apikey: Option<String>,

    #[command(subcommand)]
    pub command: FaceCommand,
}

#[derive(Subcommand, Debug)]
pub enum FaceCommand {
    /// Store the Face API key in the config file
    SaveApiKey {
        /// Key to store (prompted for when omitted)
        #[arg(value_name = "APIKEY")]
        key: Option<String>,
    },

    #[command(flatten)]
    Api(FaceApiCommand),
}

/// Face commands that call the service.
#[derive(Subcommand, Debug)]
pub enum FaceApiCommand {
    /// Detect faces in an image (URL or local file)
    Detect(DetectArgs),

    /// Identify detected faces against a trained person group
    Identify(IdentifyArgs),

    /// Find faces similar to one face among candidates
    FindSimilar(FindSimilarArgs),

    /// Divide faces into groups of similar faces
    FindGroups(FindGroupsArgs),

    /// Check whether two faces belong to the same person
    Verify(VerifyArgs),

    /// Manage person groups
    Persongroup(PersonGroupArgs),

    /// Manage people inside a person group
    Person(PersonArgs),

    /// Manage the faces registered for a person
    Personface(PersonFaceArgs),
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Do not return face landmarks
    #[arg(
        long = "no-analyzesfacelandmarks",
        action = ArgAction::SetFalse,
        env = "OXFORD_FACE_DETECT_ANALYZESFACELANDMARKS"
    )]
    pub analyzes_face_landmarks: bool,

    /// Do not estimate age
    #[arg(
        long = "no-analyzesage",
        action = ArgAction::SetFalse,
        env = "OXFORD_FACE_DETECT_ANALYZESAGE"
    )]
    pub analyzes_age: bool,

    /// Do not estimate gender
    #[arg(
        long = "no-analyzesgender",
        action = ArgAction::SetFalse,
        env = "OXFORD_FACE_DETECT_ANALYZESGENDER"
    )]
    pub analyzes_gender: bool,

    /// Do not estimate head pose
    #[arg(
        long = "no-analyzesheadpose",
        action = ArgAction::SetFalse,
        env = "OXFORD_FACE_DETECT_ANALYZESHEADPOSE"
    )]
    pub analyzes_head_pose: bool,

    /// Image URL or local file path
    pub image: String,
}

#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Person group to search
    #[arg(long = "persongroupid", env = "OXFORD_FACE_IDENTIFY_PERSONGROUPID")]
    pub person_group_id: String,

    /// Maximum candidates returned per face
    #[arg(
        long = "maxnumofcandidatesreturned",
        env = "OXFORD_FACE_IDENTIFY_MAXNUMOFCANDIDATESRETURNED",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=5)
    )]
    pub max_candidates: u32,

    /// Face ids from a previous detect
    #[arg(required = true, value_name = "FACEID")]
    pub face_ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FindSimilarArgs {
    /// Face to match
    #[arg(value_name = "FACEID")]
    pub face_id: String,

    /// Candidate face ids
    #[arg(
        long = "candidate",
        env = "OXFORD_FACE_FIND_SIMILAR_CANDIDATE",
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        value_name = "FACEID"
    )]
    pub candidates: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FindGroupsArgs {
    /// Face ids to group
    #[arg(required = true, num_args = 2.., value_name = "FACEID")]
    pub face_ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[arg(value_name = "FACEID1")]
    pub face_id1: String,

    #[arg(value_name = "FACEID2")]
    pub face_id2: String,
}

/// Execute the face command.
pub async fn execute(args: FaceArgs, session: Session) -> anyhow::Result<()> {
    match args.command {
        FaceCommand::SaveApiKey { key } => keys::save(session.config_path(), Service::Face, key),
        FaceCommand::Api(command) => {
            let oxford = session.connect(Overrides {
                face_key: args.apikey,
                ..Default::default()
            })?;
            run(&oxford, command).await
        }
    }
}

async fn run(oxford: &Oxford, command: FaceApiCommand) -> anyhow::Result<()> {
    match command {
        FaceApiCommand::Detect(args) => detect(oxford, args).await,
        FaceApiCommand::Identify(args) => identify(oxford, args).await,
        FaceApiCommand::FindSimilar(args) => find_similar(oxford, args).await,
        FaceApiCommand::FindGroups(args) => find_groups(oxford, args).await,
        FaceApiCommand::Verify(args) => verify(oxford, args).await,
        FaceApiCommand::Persongroup(args) => super::persongroup::execute(oxford, args).await,
        FaceApiCommand::Person(args) => super::person::execute(oxford, args).await,
        FaceApiCommand::Personface(args) => super::personface::execute(oxford, args).await,
    }
}

async fn detect(oxford: &Oxford, args: DetectArgs) -> anyhow::Result<()> {
    let image = ImageSource::resolve(&args.image)?;
    let call = Call::new()
        .query("analyzesFaceLandmarks", args.analyzes_face_landmarks)
        .query("analyzesAge", args.analyzes_age)
        .query("analyzesGender", args.analyzes_gender)
        .query("analyzesHeadPose", args.analyzes_head_pose)
        .image(image);

    let faces = oxford.call(&catalog::DETECT, call).await?;
    tracing::info!(
        "Detected {} face(s)",
        faces.as_array().map(Vec::len).unwrap_or_default()
    );
    print_json(&faces)
}

async fn identify(oxford: &Oxford, args: IdentifyArgs) -> anyhow::Result<()> {
    let body = IdentifyBody {
        face_ids: args.face_ids,
        person_group_id: args.person_group_id,
        max_num_of_candidates_returned: args.max_candidates,
    };
    let value = oxford
        .call(&catalog::IDENTIFY, Call::new().payload(Payload::json(&body)?))
        .await?;
    print_json(&value)
}

async fn find_similar(oxford: &Oxford, args: FindSimilarArgs) -> anyhow::Result<()> {
    let body = FindSimilarBody {
        face_id: args.face_id,
        face_ids: args.candidates,
    };
    let value = oxford
        .call(&catalog::FIND_SIMILAR, Call::new().payload(Payload::json(&body)?))
        .await?;
    print_json(&value)
}

async fn find_groups(oxford: &Oxford, args: FindGroupsArgs) -> anyhow::Result<()> {
    let body = GroupBody {
        face_ids: args.face_ids,
    };
    let value = oxford
        .call(&catalog::FIND_GROUPS, Call::new().payload(Payload::json(&body)?))
        .await?;
    print_json(&value)
}

async fn verify(oxford: &Oxford, args: VerifyArgs) -> anyhow::Result<()> {
    let body = VerifyBody {
        face_id1: args.face_id1,
        face_id2: args.face_id2,
    };
    let value = oxford
        .call(&catalog::VERIFY, Call::new().payload(Payload::json(&body)?))
        .await?;
    print_json(&value)
}
