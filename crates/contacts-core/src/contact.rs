//! The contact record and its create/update inputs.

use serde::{Deserialize, Serialize};

/// A single contact, serialised with exactly the keys `id`, `name`, `email`
/// and `phone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:    String,
  pub name:  String,
  pub email: String,
  pub phone: String,
}

impl Contact {
  /// Build a contact from creation fields and a store-assigned id.
  pub fn from_new(id: String, fields: NewContact) -> Self {
    Self {
      id,
      name: fields.name,
      email: fields.email,
      phone: fields.phone,
    }
  }
}

/// Field values for a contact that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
  pub name:  String,
  pub email: String,
  pub phone: String,
}

/// A partial update. Absent fields leave the stored value untouched.
///
/// There is no `id` field: an update can never re-key a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
}

impl ContactPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.email.is_none() && self.phone.is_none()
  }

  /// Shallow-merge the patch onto `contact`.
  pub fn apply(self, contact: &mut Contact) {
    if let Some(name) = self.name {
      contact.name = name;
    }
    if let Some(email) = self.email {
      contact.email = email;
    }
    if let Some(phone) = self.phone {
      contact.phone = phone;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn jane() -> Contact {
    Contact {
      id:    "c-1".into(),
      name:  "Jane Doe".into(),
      email: "jane@example.com".into(),
      phone: "(212) 555-0100".into(),
    }
  }

  #[test]
  fn patch_overwrites_only_present_fields() {
    let mut contact = jane();
    ContactPatch {
      name: Some("Janet Doe".into()),
      ..Default::default()
    }
    .apply(&mut contact);

    assert_eq!(contact.id, "c-1");
    assert_eq!(contact.name, "Janet Doe");
    assert_eq!(contact.email, "jane@example.com");
    assert_eq!(contact.phone, "(212) 555-0100");
  }

  #[test]
  fn empty_patch_is_empty() {
    assert!(ContactPatch::default().is_empty());
    let patch = ContactPatch {
      phone: Some("(111) 222-3333".into()),
      ..Default::default()
    };
    assert!(!patch.is_empty());
  }

  #[test]
  fn contact_serialises_with_exact_keys() {
    let value = serde_json::to_value(jane()).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["email", "id", "name", "phone"]);
  }
}
