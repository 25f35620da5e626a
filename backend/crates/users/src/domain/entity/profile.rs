//! Profile Entity
//!
//! Non-sensitive attributes owned by the Profile Service.

use serde::Serialize;

use crate::domain::value_object::{profile_text::ProfileText, user_id::UserId};

#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: UserId,
    pub bio: ProfileText,
    pub interests: ProfileText,
}

impl Profile {
    pub fn new(user_id: UserId, bio: ProfileText, interests: ProfileText) -> Self {
        Self {
            user_id,
            bio,
            interests,
        }
    }

    /// Wire shape pushed to the Profile Service
    pub fn to_payload(&self) -> ProfilePayload<'_> {
        ProfilePayload {
            user_id: self.user_id.to_string(),
            bio: self.bio.as_str(),
            interests: self.interests.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload<'a> {
    pub user_id: String,
    pub bio: &'a str,
    pub interests: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let user_id = UserId::new();
        let profile = Profile::new(
            user_id,
            ProfileText::new("bio", "hi").unwrap(),
            ProfileText::new("interests", "golf").unwrap(),
        );

        let json = serde_json::to_value(profile.to_payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": user_id.to_string(),
                "bio": "hi",
                "interests": "golf",
            })
        );
    }
}
