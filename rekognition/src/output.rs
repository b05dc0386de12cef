/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs. Every field is optional; the service omits what does not apply.

use serde::{Deserialize, Serialize};
use smithy_types::Instant;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateFacesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_faces: Option<Vec<crate::model::AssociatedFace>>,
    /// Faces that could not be associated, with the reasons why
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsuccessful_face_associations: Option<Vec<crate::model::UnsuccessfulFaceAssociation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<crate::model::UserStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCollectionOutput {
    /// HTTP status code of the underlying call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_arn: Option<String>,
    /// Version of the face model associated with the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserOutput {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFacesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_faces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsuccessful_face_deletions: Option<Vec<crate::model::UnsuccessfulFaceDeletion>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteUserOutput {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCollectionOutput {
    /// Number of faces indexed into the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    #[serde(rename = "CollectionARN", skip_serializing_if = "Option::is_none")]
    pub collection_arn: Option<String>,
    #[serde(
        default,
        with = "crate::instant_epoch",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProjectsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_descriptions: Option<Vec<crate::model::ProjectDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFacesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_details: Option<Vec<crate::model::FaceDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_correction: Option<crate::model::OrientationCorrection>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<crate::model::Label>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_correction: Option<crate::model::OrientationCorrection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_model_version: Option<String>,
    /// Present when `IMAGE_PROPERTIES` was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_properties: Option<crate::model::DetectLabelsImageProperties>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectProtectiveEquipmentOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protective_equipment_model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons: Option<Vec<crate::model::ProtectiveEquipmentPerson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<crate::model::ProtectiveEquipmentSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectTextOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_detections: Option<Vec<crate::model::TextDetection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_model_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateFacesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociated_faces: Option<Vec<crate::model::DisassociatedFace>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsuccessful_face_disassociations:
        Option<Vec<crate::model::UnsuccessfulFaceDisassociation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<crate::model::UserStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCelebrityRecognitionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<crate::model::VideoJobStatus>,
    /// Why the job failed, when `job_status` is `FAILED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_metadata: Option<crate::model::VideoMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebrities: Option<Vec<crate::model::CelebrityRecognition>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFacesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_records: Option<Vec<crate::model::FaceRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_correction: Option<crate::model::OrientationCorrection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    /// Faces that were detected but not indexed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unindexed_faces: Option<Vec<crate::model::UnindexedFace>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFacesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faces: Option<Vec<crate::model::Face>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<crate::model::User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecognizeCelebritiesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebrity_faces: Option<Vec<crate::model::Celebrity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrecognized_faces: Option<Vec<crate::model::ComparedFace>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_correction: Option<crate::model::OrientationCorrection>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesOutput {
    /// Id of the face that was searched for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched_face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_matches: Option<Vec<crate::model::FaceMatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesByImageOutput {
    /// The face in the input image that was used for the search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched_face_bounding_box: Option<crate::model::BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched_face_confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_matches: Option<Vec<crate::model::FaceMatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchUsersOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_matches: Option<Vec<crate::model::UserMatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched_face: Option<crate::model::SearchedFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched_user: Option<crate::model::SearchedUser>,
}
