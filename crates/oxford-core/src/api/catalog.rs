//! Every remote operation the client knows about.

use super::operation::{
    BodyKind, HttpMethod, Operation, QueryDefault, QueryParam, ResponseKind, Service,
};

const fn face(
    name: &'static str,
    method: HttpMethod,
    path: &'static str,
    body: BodyKind,
) -> Operation {
    Operation {
        name,
        service: Service::Face,
        method,
        path,
        query: &[],
        body,
        response: ResponseKind::Json,
        success_status: 200,
    }
}

// --- Face ---

pub const DETECT: Operation = Operation {
    query: &[
        QueryParam {
            name: "analyzesFaceLandmarks",
            default: QueryDefault::Bool(true),
        },
        QueryParam {
            name: "analyzesAge",
            default: QueryDefault::Bool(true),
        },
        QueryParam {
            name: "analyzesGender",
            default: QueryDefault::Bool(true),
        },
        QueryParam {
            name: "analyzesHeadPose",
            default: QueryDefault::Bool(true),
        },
    ],
    ..face("face detect", HttpMethod::Post, "detections", BodyKind::Image)
};

pub const FIND_SIMILAR: Operation = face(
    "face find-similar",
    HttpMethod::Post,
    "findsimilars",
    BodyKind::Json,
);

pub const FIND_GROUPS: Operation = face(
    "face find-groups",
    HttpMethod::Post,
    "groupings",
    BodyKind::Json,
);

pub const IDENTIFY: Operation = face(
    "face identify",
    HttpMethod::Post,
    "identifications",
    BodyKind::Json,
);

pub const VERIFY: Operation = face(
    "face verify",
    HttpMethod::Post,
    "verifications",
    BodyKind::Json,
);

// --- Person groups ---

pub const PERSONGROUP_CREATE: Operation = face(
    "persongroup create",
    HttpMethod::Put,
    "persongroups/{personGroupId}",
    BodyKind::Json,
);

pub const PERSONGROUP_LIST: Operation = face(
    "persongroup list",
    HttpMethod::Get,
    "persongroups",
    BodyKind::Empty,
);

pub const PERSONGROUP_GET: Operation = face(
    "persongroup get",
    HttpMethod::Get,
    "persongroups/{personGroupId}",
    BodyKind::Empty,
);

pub const PERSONGROUP_LIST_PEOPLE: Operation = face(
    "persongroup list-people",
    HttpMethod::Get,
    "persongroups/{personGroupId}/persons",
    BodyKind::Empty,
);

pub const PERSONGROUP_TRAINING_STATUS: Operation = face(
    "persongroup training-status",
    HttpMethod::Get,
    "persongroups/{personGroupId}/training",
    BodyKind::Empty,
);

pub const PERSONGROUP_TRAIN: Operation = face(
    "persongroup train",
    HttpMethod::Post,
    "persongroups/{personGroupId}/training",
    BodyKind::Empty,
);

pub const PERSONGROUP_UPDATE: Operation = face(
    "persongroup update",
    HttpMethod::Patch,
    "persongroups/{personGroupId}",
    BodyKind::Json,
);

pub const PERSONGROUP_DELETE: Operation = face(
    "persongroup delete",
    HttpMethod::Delete,
    "persongroups/{personGroupId}",
    BodyKind::Empty,
);

// --- Persons ---

pub const PERSON_CREATE: Operation = face(
    "person create",
    HttpMethod::Post,
    "persongroups/{personGroupId}/persons",
    BodyKind::Json,
);

pub const PERSON_GET: Operation = face(
    "person get",
    HttpMethod::Get,
    "persongroups/{personGroupId}/persons/{personId}",
    BodyKind::Empty,
);

pub const PERSON_UPDATE: Operation = face(
    "person update",
    HttpMethod::Patch,
    "persongroups/{personGroupId}/persons/{personId}",
    BodyKind::Json,
);

pub const PERSON_DELETE: Operation = face(
    "person delete",
    HttpMethod::Delete,
    "persongroups/{personGroupId}/persons/{personId}",
    BodyKind::Empty,
);

// --- Person faces ---

pub const PERSONFACE_ADD: Operation = face(
    "personface add",
    HttpMethod::Put,
    "persongroups/{personGroupId}/persons/{personId}/faces/{faceId}",
    BodyKind::Json,
);

pub const PERSONFACE_GET: Operation = face(
    "personface get",
    HttpMethod::Get,
    "persongroups/{personGroupId}/persons/{personId}/faces/{faceId}",
    BodyKind::Empty,
);

pub const PERSONFACE_UPDATE: Operation = face(
    "personface update",
    HttpMethod::Patch,
    "persongroups/{personGroupId}/persons/{personId}/faces/{faceId}",
    BodyKind::Json,
);

pub const PERSONFACE_DELETE: Operation = face(
    "personface delete",
    HttpMethod::Delete,
    "persongroups/{personGroupId}/persons/{personId}/faces/{faceId}",
    BodyKind::Empty,
);

// --- Vision ---

pub const ANALYZE: Operation = Operation {
    name: "vision analyze",
    service: Service::Vision,
    method: HttpMethod::Post,
    path: "analyses",
    query: &[QueryParam {
        name: "visualFeatures",
        default: QueryDefault::Unset,
    }],
    body: BodyKind::Image,
    response: ResponseKind::Json,
    success_status: 200,
};

pub const THUMBNAIL: Operation = Operation {
    name: "vision thumbnail",
    service: Service::Vision,
    method: HttpMethod::Post,
    path: "thumbnails",
    query: &[
        QueryParam {
            name: "width",
            default: QueryDefault::Int(50),
        },
        QueryParam {
            name: "height",
            default: QueryDefault::Int(50),
        },
        QueryParam {
            name: "smartCropping",
            default: QueryDefault::Bool(true),
        },
    ],
    body: BodyKind::Image,
    response: ResponseKind::Binary,
    success_status: 200,
};

pub const OCR: Operation = Operation {
    name: "vision ocr",
    service: Service::Vision,
    method: HttpMethod::Post,
    path: "ocr",
    query: &[
        QueryParam {
            name: "language",
            default: QueryDefault::Text("unk"),
        },
        QueryParam {
            name: "detectOrientation",
            default: QueryDefault::Bool(true),
        },
    ],
    body: BodyKind::Image,
    response: ResponseKind::Json,
    success_status: 200,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: &[Operation] = &[
        DETECT,
        FIND_SIMILAR,
        FIND_GROUPS,
        IDENTIFY,
        VERIFY,
        PERSONGROUP_CREATE,
        PERSONGROUP_LIST,
        PERSONGROUP_GET,
        PERSONGROUP_LIST_PEOPLE,
        PERSONGROUP_TRAINING_STATUS,
        PERSONGROUP_TRAIN,
        PERSONGROUP_UPDATE,
        PERSONGROUP_DELETE,
        PERSON_CREATE,
        PERSON_GET,
        PERSON_UPDATE,
        PERSON_DELETE,
        PERSONFACE_ADD,
        PERSONFACE_GET,
        PERSONFACE_UPDATE,
        PERSONFACE_DELETE,
        ANALYZE,
        THUMBNAIL,
        OCR,
    ];

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = ALL.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn paths_are_relative_and_placeholders_well_formed() {
        for op in ALL {
            assert!(!op.path.starts_with('/'), "{} has a leading slash", op.name);
            for segment in op.path.split('/') {
                assert!(!segment.is_empty(), "{} has an empty segment", op.name);
                let braces = segment.contains('{') || segment.contains('}');
                assert_eq!(
                    braces,
                    super::super::operation::placeholder(segment).is_some(),
                    "{} has a malformed segment {segment:?}",
                    op.name
                );
            }
        }
    }

    #[test]
    fn only_thumbnail_returns_binary() {
        let binary: Vec<_> = ALL
            .iter()
            .filter(|op| op.response == ResponseKind::Binary)
            .map(|op| op.name)
            .collect();
        assert_eq!(binary, ["vision thumbnail"]);
    }

    #[test]
    fn reads_never_carry_a_body() {
        for op in ALL.iter().filter(|op| op.method == HttpMethod::Get) {
            assert_eq!(op.body, BodyKind::Empty, "{}", op.name);
        }
    }
}
