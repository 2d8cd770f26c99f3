//! Canned face detection result
//!
//! Mirrors the shape of the Face API `detect` response with
//! `returnFaceAttributes=age,gender,headPose,smile`.

use serde::Serialize;

/// A single detected face
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFace {
    pub face_id: &'static str,
    pub face_rectangle: FaceRectangle,
    pub face_attributes: FaceAttributes,
}

/// Bounding box in image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceRectangle {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAttributes {
    pub gender: &'static str,
    pub age: f64,
    /// 0.0 (neutral) to 1.0 (full smile)
    pub smile: f64,
    pub head_pose: HeadPose,
}

/// Head orientation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadPose {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

/// The faces returned by every detection request, in order.
pub static MOCK_FACES: [DetectedFace; 2] = [
    DetectedFace {
        face_id: "mock-face-001",
        face_rectangle: FaceRectangle {
            top: 100,
            left: 120,
            width: 150,
            height: 150,
        },
        face_attributes: FaceAttributes {
            gender: "male",
            age: 28.0,
            smile: 0.8,
            head_pose: HeadPose {
                yaw: 5.0,
                pitch: 0.0,
                roll: 0.0,
            },
        },
    },
    DetectedFace {
        face_id: "mock-face-002",
        face_rectangle: FaceRectangle {
            top: 120,
            left: 400,
            width: 140,
            height: 140,
        },
        face_attributes: FaceAttributes {
            gender: "female",
            age: 32.0,
            smile: 0.6,
            head_pose: HeadPose {
                yaw: -3.0,
                pitch: 0.0,
                roll: 0.0,
            },
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_wire_field_names() {
        let json: Value = serde_json::to_value(&MOCK_FACES).unwrap();
        let first = &json[0];
        assert_eq!(first["faceId"], "mock-face-001");
        assert_eq!(first["faceRectangle"]["left"], 120);
        assert_eq!(first["faceAttributes"]["gender"], "male");
        assert_eq!(first["faceAttributes"]["headPose"]["yaw"], 5.0);
    }

    #[test]
    fn test_second_face() {
        let json: Value = serde_json::to_value(&MOCK_FACES).unwrap();
        let second = &json[1];
        assert_eq!(second["faceId"], "mock-face-002");
        assert_eq!(second["faceAttributes"]["gender"], "female");
        assert_eq!(second["faceAttributes"]["age"], 32.0);
        assert_eq!(second["faceAttributes"]["headPose"]["yaw"], -3.0);
    }

    #[test]
    fn test_smile_in_unit_range() {
        assert!(MOCK_FACES
            .iter()
            .all(|f| (0.0..=1.0).contains(&f.face_attributes.smile)));
    }
}
