use serde::{Deserialize, Serialize};

use crate::users::repo::UserRecord;

/// Incoming user fields. Create and update share this shape; which fields
/// must be present is decided by the validators, not by deserialization, so
/// a missing field surfaces as a 400 instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub lastname: Option<String>,
    pub dob: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UserPayload {
    /// Build the full record for a freshly validated create payload.
    pub fn into_record(self, user_id: String) -> UserRecord {
        UserRecord {
            user_id,
            lastname: self.lastname.unwrap_or_default(),
            dob: self.dob.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
        }
    }

    /// Merge supplied fields over an existing record. Fields absent from
    /// the payload keep their prior values; `user_id` is untouchable.
    pub fn apply_to(&self, user: &mut UserRecord) {
        if let Some(lastname) = &self.lastname {
            user.lastname = lastname.clone();
        }
        if let Some(dob) = &self.dob {
            user.dob = dob.clone();
        }
        if let Some(address) = &self.address {
            user.address = address.clone();
        }
        if let Some(gender) = &self.gender {
            user.gender = gender.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(phone_number) = &self.phone_number {
            user.phone_number = phone_number.clone();
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> UserPayload {
        serde_json::from_value(serde_json::json!({
            "lastname": "Doe",
            "dob": "1990-01-01",
            "email": "doe@example.com",
            "phone_number": "5551234567"
        }))
        .unwrap()
    }

    #[test]
    fn into_record_defaults_optionals_to_empty() {
        let user = full_payload().into_record("u-1".into());
        assert_eq!(user.user_id, "u-1");
        assert_eq!(user.lastname, "Doe");
        assert_eq!(user.address, "");
        assert_eq!(user.gender, "");
    }

    #[test]
    fn apply_to_merges_only_supplied_fields() {
        let mut user = full_payload().into_record("u-1".into());
        let patch: UserPayload =
            serde_json::from_value(serde_json::json!({ "address": "123 Main St" })).unwrap();
        patch.apply_to(&mut user);

        assert_eq!(user.address, "123 Main St");
        assert_eq!(user.user_id, "u-1");
        assert_eq!(user.lastname, "Doe");
        assert_eq!(user.dob, "1990-01-01");
        assert_eq!(user.email, "doe@example.com");
        assert_eq!(user.phone_number, "5551234567");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: UserPayload = serde_json::from_value(serde_json::json!({
            "lastname": "Doe",
            "favourite_colour": "green"
        }))
        .unwrap();
        assert_eq!(payload.lastname.as_deref(), Some("Doe"));
    }
}
