/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Value shapes shared between operation inputs and outputs.
//!
//! Every shape is a plain record: public fields, `Default`, structural equality and a
//! PascalCase JSON form in which absent fields are omitted. Build them with struct literals:
//!
//! ```
//! use rekognition::model::{BoundingBox, Face};
//!
//! let face = Face {
//!     face_id: Some("a1b2c3d4-0000-4000-8000-000000000000".to_owned()),
//!     bounding_box: Some(BoundingBox {
//!         width: Some(0.25),
//!         height: Some(0.4),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! assert!(face.user_id.is_none());
//! ```

use crate::error::BuildError;
use crate::validation::{self, Pattern};
use serde::{Deserialize, Serialize};
use smithy_types::{Blob, Instant};

string_enum! {
    /// Facial attributes to return. `DEFAULT` is a subset, `ALL` is every attribute.
    pub enum Attribute {
        AgeRange => "AGE_RANGE",
        All => "ALL",
        Beard => "BEARD",
        Default => "DEFAULT",
        Emotions => "EMOTIONS",
        EyeDirection => "EYE_DIRECTION",
        Eyeglasses => "EYEGLASSES",
        EyesOpen => "EYES_OPEN",
        FaceOccluded => "FACE_OCCLUDED",
        Gender => "GENDER",
        MouthOpen => "MOUTH_OPEN",
        Mustache => "MUSTACHE",
        Smile => "SMILE",
        Sunglasses => "SUNGLASSES",
    }
}

string_enum! {
    pub enum BodyPart {
        Face => "FACE",
        Head => "HEAD",
        LeftHand => "LEFT_HAND",
        RightHand => "RIGHT_HAND",
    }
}

string_enum! {
    pub enum CelebrityRecognitionSortBy {
        Id => "ID",
        Timestamp => "TIMESTAMP",
    }
}

string_enum! {
    pub enum CustomizationFeature {
        ContentModeration => "CONTENT_MODERATION",
        CustomLabels => "CUSTOM_LABELS",
    }
}

string_enum! {
    pub enum DatasetStatus {
        CreateComplete => "CREATE_COMPLETE",
        CreateFailed => "CREATE_FAILED",
        CreateInProgress => "CREATE_IN_PROGRESS",
        DeleteInProgress => "DELETE_IN_PROGRESS",
        UpdateComplete => "UPDATE_COMPLETE",
        UpdateFailed => "UPDATE_FAILED",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
    }
}

string_enum! {
    pub enum DatasetStatusMessageCode {
        ClientError => "CLIENT_ERROR",
        ServiceError => "SERVICE_ERROR",
        Success => "SUCCESS",
    }
}

string_enum! {
    pub enum DatasetType {
        Test => "TEST",
        Train => "TRAIN",
    }
}

string_enum! {
    pub enum DetectLabelsFeatureName {
        GeneralLabels => "GENERAL_LABELS",
        ImageProperties => "IMAGE_PROPERTIES",
    }
}

string_enum! {
    pub enum EmotionName {
        Angry => "ANGRY",
        Calm => "CALM",
        Confused => "CONFUSED",
        Disgusted => "DISGUSTED",
        Fear => "FEAR",
        Happy => "HAPPY",
        Sad => "SAD",
        Surprised => "SURPRISED",
        /// The service could not determine the emotion; distinct from a value this crate
        /// does not recognize.
        UnknownValue => "UNKNOWN",
    }
}

string_enum! {
    pub enum GenderType {
        Female => "Female",
        Male => "Male",
    }
}

string_enum! {
    pub enum KnownGenderType {
        Female => "Female",
        Male => "Male",
        Nonbinary => "Nonbinary",
        Unlisted => "Unlisted",
    }
}

string_enum! {
    pub enum LandmarkType {
        ChinBottom => "chinBottom",
        EyeLeft => "eyeLeft",
        EyeRight => "eyeRight",
        LeftEyeBrowLeft => "leftEyeBrowLeft",
        LeftEyeBrowRight => "leftEyeBrowRight",
        LeftEyeBrowUp => "leftEyeBrowUp",
        LeftEyeDown => "leftEyeDown",
        LeftEyeLeft => "leftEyeLeft",
        LeftEyeRight => "leftEyeRight",
        LeftEyeUp => "leftEyeUp",
        LeftPupil => "leftPupil",
        MidJawlineLeft => "midJawlineLeft",
        MidJawlineRight => "midJawlineRight",
        MouthDown => "mouthDown",
        MouthLeft => "mouthLeft",
        MouthRight => "mouthRight",
        MouthUp => "mouthUp",
        Nose => "nose",
        NoseLeft => "noseLeft",
        NoseRight => "noseRight",
        RightEyeBrowLeft => "rightEyeBrowLeft",
        RightEyeBrowRight => "rightEyeBrowRight",
        RightEyeBrowUp => "rightEyeBrowUp",
        RightEyeDown => "rightEyeDown",
        RightEyeLeft => "rightEyeLeft",
        RightEyeRight => "rightEyeRight",
        RightEyeUp => "rightEyeUp",
        RightPupil => "rightPupil",
        UpperJawlineLeft => "upperJawlineLeft",
        UpperJawlineRight => "upperJawlineRight",
    }
}

string_enum! {
    pub enum OrientationCorrection {
        Rotate0 => "ROTATE_0",
        Rotate180 => "ROTATE_180",
        Rotate270 => "ROTATE_270",
        Rotate90 => "ROTATE_90",
    }
}

string_enum! {
    pub enum ProjectAutoUpdate {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

string_enum! {
    pub enum ProjectStatus {
        Created => "CREATED",
        Creating => "CREATING",
        Deleting => "DELETING",
    }
}

string_enum! {
    pub enum ProtectiveEquipmentType {
        FaceCover => "FACE_COVER",
        HandCover => "HAND_COVER",
        HeadCover => "HEAD_COVER",
    }
}

string_enum! {
    /// How strictly low quality faces are filtered out before indexing or searching.
    pub enum QualityFilter {
        Auto => "AUTO",
        High => "HIGH",
        Low => "LOW",
        Medium => "MEDIUM",
        None => "NONE",
    }
}

string_enum! {
    /// Why a detected face was not indexed.
    pub enum Reason {
        ExceedsMaxFaces => "EXCEEDS_MAX_FACES",
        ExtremePose => "EXTREME_POSE",
        LowBrightness => "LOW_BRIGHTNESS",
        LowConfidence => "LOW_CONFIDENCE",
        LowFaceQuality => "LOW_FACE_QUALITY",
        LowSharpness => "LOW_SHARPNESS",
        SmallBoundingBox => "SMALL_BOUNDING_BOX",
    }
}

string_enum! {
    pub enum TextTypes {
        Line => "LINE",
        Word => "WORD",
    }
}

string_enum! {
    pub enum UnsuccessfulFaceAssociationReason {
        AssociatedToADifferentUser => "ASSOCIATED_TO_A_DIFFERENT_USER",
        FaceNotFound => "FACE_NOT_FOUND",
        LowMatchConfidence => "LOW_MATCH_CONFIDENCE",
    }
}

string_enum! {
    pub enum UnsuccessfulFaceDeletionReason {
        AssociatedToAnExistingUser => "ASSOCIATED_TO_AN_EXISTING_USER",
        FaceNotFound => "FACE_NOT_FOUND",
    }
}

string_enum! {
    pub enum UnsuccessfulFaceDisassociationReason {
        AssociatedToADifferentUser => "ASSOCIATED_TO_A_DIFFERENT_USER",
        FaceNotFound => "FACE_NOT_FOUND",
    }
}

string_enum! {
    pub enum UserStatus {
        Active => "ACTIVE",
        Created => "CREATED",
        Creating => "CREATING",
        Updating => "UPDATING",
    }
}

string_enum! {
    pub enum VideoColorRange {
        Full => "FULL",
        Limited => "LIMITED",
    }
}

string_enum! {
    pub enum VideoJobStatus {
        Failed => "FAILED",
        InProgress => "IN_PROGRESS",
        Succeeded => "SUCCEEDED",
    }
}

/// Estimated age range, in years, of a detected face.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<i32>,
}

/// A face that was associated with a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociatedFace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Beard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Location of a detected region, as ratios of the overall image dimensions.
///
/// `left` and `top` can be negative, or greater than one, when the region extends past the
/// edge of the image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
}

/// A celebrity recognized in an image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Celebrity {
    /// Links to additional information about the celebrity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unique identifier of the celebrity, stable across calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<ComparedFace>,
    /// Confidence, 0 to 100, that the face matches the celebrity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_gender: Option<KnownGender>,
}

/// A celebrity recognized in a stored video.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CelebrityDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<FaceDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_gender: Option<KnownGender>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CelebrityRecognition {
    /// Milliseconds from the start of the video at which the celebrity was recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebrity: Option<CelebrityDetail>,
}

/// Facial information returned by celebrity recognition and face comparison.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComparedFace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Landmark>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Vec<Emotion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smile: Option<Smile>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoversBodyPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Whether the detected equipment covers the body part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
}

/// Summary of a dataset belonging to a Custom Labels project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetMetadata {
    #[serde(
        default,
        with = "crate::instant_epoch",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<DatasetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DatasetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message_code: Option<DatasetStatusMessageCode>,
}

/// Filters applied to detected words before they are returned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectionFilter {
    /// Minimum confidence, 0 to 100. Defaults to 80 on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,
    /// Minimum height of a word's bounding box, as a ratio of the image height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bounding_box_height: Option<f32>,
    /// Minimum width of a word's bounding box, as a ratio of the image width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bounding_box_width: Option<f32>,
}

impl DetectionFilter {
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        validation::range(
            "DetectionFilter.MinConfidence",
            self.min_confidence,
            0.0,
            Some(100.0),
        )?;
        validation::range(
            "DetectionFilter.MinBoundingBoxHeight",
            self.min_bounding_box_height,
            0.0,
            Some(1.0),
        )?;
        validation::range(
            "DetectionFilter.MinBoundingBoxWidth",
            self.min_bounding_box_width,
            0.0,
            Some(1.0),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsImageBackground {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<DetectLabelsImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<Vec<DominantColor>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsImageForeground {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<DetectLabelsImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<Vec<DominantColor>>,
}

/// Quality and color information about an image, returned when `IMAGE_PROPERTIES` is requested.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsImageProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<DetectLabelsImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<Vec<DominantColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<DetectLabelsImageForeground>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<DetectLabelsImageBackground>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsImagePropertiesSettings {
    /// Number of dominant colors to return, at most 12
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dominant_colors: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsImageQuality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f32>,
}

/// Per-feature settings for `DetectLabels`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_labels: Option<GeneralLabelsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_properties: Option<DetectLabelsImagePropertiesSettings>,
}

impl DetectLabelsSettings {
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if let Some(general_labels) = &self.general_labels {
            validation::items(
                "Settings.GeneralLabels.LabelInclusionFilters",
                general_labels.label_inclusion_filters.as_deref(),
                0,
                Some(100),
            )?;
            validation::items(
                "Settings.GeneralLabels.LabelExclusionFilters",
                general_labels.label_exclusion_filters.as_deref(),
                0,
                Some(100),
            )?;
            validation::items(
                "Settings.GeneralLabels.LabelCategoryInclusionFilters",
                general_labels.label_category_inclusion_filters.as_deref(),
                0,
                Some(100),
            )?;
            validation::items(
                "Settings.GeneralLabels.LabelCategoryExclusionFilters",
                general_labels.label_category_exclusion_filters.as_deref(),
                0,
                Some(100),
            )?;
        }
        if let Some(image_properties) = &self.image_properties {
            validation::range(
                "Settings.ImageProperties.MaxDominantColors",
                image_properties.max_dominant_colors,
                0.0,
                Some(12.0),
            )?;
        }
        Ok(())
    }
}

/// Filters for `DetectText`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectTextFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_filter: Option<DetectionFilter>,
    /// Areas of the image to look for text in, at most 10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions_of_interest: Option<Vec<RegionOfInterest>>,
}

impl DetectTextFilters {
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if let Some(word_filter) = &self.word_filter {
            word_filter.validate()?;
        }
        validation::items(
            "Filters.RegionsOfInterest",
            self.regions_of_interest.as_deref(),
            0,
            Some(10),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociatedFace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
}

/// A color present in an image, with its share of the image's pixels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DominantColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_code: Option<String>,
    #[serde(rename = "CSSColor", skip_serializing_if = "Option::is_none")]
    pub css_color: Option<String>,
    /// One of the 12 simplified color names, e.g. `red`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_percent: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Emotion {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<EmotionName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// A piece of personal protective equipment detected on a body part.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EquipmentDetection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ProtectiveEquipmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covers_body_part: Option<CoversBodyPart>,
}

/// Direction the eyes are gazing in, in degrees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EyeDirection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Eyeglasses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EyeOpen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// A face stored in a collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Face {
    /// UUID the service assigned when the face was indexed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// UUID of the image the face was detected in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Identifier the caller attached when indexing the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_faces_model_version: Option<String>,
    /// The user the face is associated with, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Attributes of a detected face.
///
/// `DetectFaces` and `IndexFaces` only fill in the attributes that were requested; by default
/// that is `bounding_box`, `confidence`, `pose`, `quality` and `landmarks`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smile: Option<Smile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyeglasses: Option<Eyeglasses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunglasses: Option<Sunglasses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beard: Option<Beard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mustache: Option<Mustache>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyes_open: Option<EyeOpen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouth_open: Option<MouthOpen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Vec<Emotion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Landmark>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_occluded: Option<FaceOccluded>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_direction: Option<EyeDirection>,
}

/// A face in a collection that matched a search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceMatch {
    /// Confidence, 0 to 100, that the faces match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<Face>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceOccluded {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// A face that `IndexFaces` added to a collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<Face>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_detail: Option<FaceDetail>,
}

/// Predicted gender presentation of a face, based on its physical appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<GenderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Labels and label categories to include in, or exclude from, `DetectLabels` results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralLabelsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_inclusion_filters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_exclusion_filters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_category_inclusion_filters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_category_exclusion_filters: Option<Vec<String>>,
}

/// Location of detected text as a bounding box and a finer grained polygon.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<Point>>,
}

/// The image to analyze: either its raw bytes or a reference to an S3 object.
///
/// Bytes are base64 encoded on the wire and may be at most 5 MB before encoding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    #[serde(
        default,
        with = "crate::blob_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub bytes: Option<Blob>,
    #[serde(rename = "S3Object", skip_serializing_if = "Option::is_none")]
    pub s3_object: Option<S3Object>,
}

impl Image {
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        validation::blob("Image.Bytes", self.bytes.as_ref(), 1, Some(5_242_880))?;
        if let Some(s3_object) = &self.s3_object {
            s3_object.validate()?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageQuality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<f32>,
}

/// One occurrence of a label's object in the image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<Vec<DominantColor>>,
}

/// The gender a celebrity is publicly known to identify as.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KnownGender {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<KnownGenderType>,
}

/// An object, scene, action or concept found in an image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Where the label's object appears, for labels that have a bounding box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<Instance>>,
    /// Ancestors of the label in the label hierarchy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<Parent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<LabelAlias>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<LabelCategory>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelAlias {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A facial landmark, located as ratios of the image dimensions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Landmark {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<LandmarkType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchedUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MouthOpen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mustache {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A point of a polygon, as ratios of the image dimensions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Point {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

/// Head orientation, in degrees from -180 to 180.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pose {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,
}

/// A Custom Labels or content moderation adapter project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_arn: Option<String>,
    #[serde(
        default,
        with = "crate::instant_epoch",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_timestamp: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<DatasetMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<CustomizationFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_update: Option<ProjectAutoUpdate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtectiveEquipmentBodyPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<BodyPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_detections: Option<Vec<EquipmentDetection>>,
}

/// A person detected by `DetectProtectiveEquipment`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtectiveEquipmentPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_parts: Option<Vec<ProtectiveEquipmentBodyPart>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Identifier of the person, unique within the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

/// Which equipment a person must wear, and how confident a detection must be, for the summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtectiveEquipmentSummarizationAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_equipment_types: Option<Vec<ProtectiveEquipmentType>>,
}

impl ProtectiveEquipmentSummarizationAttributes {
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        validation::required(
            "SummarizationAttributes.MinConfidence",
            self.min_confidence.as_ref(),
        )?;
        validation::range(
            "SummarizationAttributes.MinConfidence",
            self.min_confidence,
            0.0,
            Some(100.0),
        )?;
        validation::required(
            "SummarizationAttributes.RequiredEquipmentTypes",
            self.required_equipment_types.as_ref(),
        )?;
        validation::variants(
            "SummarizationAttributes.RequiredEquipmentTypes",
            self.required_equipment_types.as_deref(),
        )
    }
}

/// Ids of the persons in a `DetectProtectiveEquipment` response, grouped by compliance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtectiveEquipmentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons_with_required_equipment: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons_without_required_equipment: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons_indeterminate: Option<Vec<i32>>,
}

/// An area of the image, given as a bounding box or as a polygon.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionOfInterest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<Point>>,
}

/// Location of an image in S3. The bucket must be in the region of the endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Object {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Object version, if versioning is enabled on the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl S3Object {
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        validation::string(
            "S3Object.Bucket",
            self.bucket.as_deref(),
            3,
            Some(255),
            Some(Pattern::S3Bucket),
        )?;
        validation::string("S3Object.Name", self.name.as_deref(), 1, Some(1024), None)?;
        validation::string(
            "S3Object.Version",
            self.version.as_deref(),
            1,
            Some(1024),
            None,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchedFace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchedUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Smile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sunglasses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// A line, or a word within a line, detected by `DetectText`.
///
/// Words carry the `id` of their line in `parent_id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextDetection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_text: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TextTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

/// A face that `IndexFaces` detected but did not index, and why.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnindexedFace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<Reason>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_detail: Option<FaceDetail>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsuccessfulFaceAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Match confidence with the user, when the failure is `LOW_MATCH_CONFIDENCE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<UnsuccessfulFaceAssociationReason>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsuccessfulFaceDeletion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<UnsuccessfulFaceDeletionReason>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsuccessfulFaceDisassociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<UnsuccessfulFaceDisassociationReason>>,
}

/// A user in a collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<MatchedUser>,
}

/// Information about a stored video analyzed by a Rekognition Video job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_millis: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_range: Option<VideoColorRange>,
}
