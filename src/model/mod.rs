use serde::{Deserialize, Serialize};

/// Value used for BusinessTitle when the source cell is empty.
pub const DEFAULT_BUSINESS_TITLE: &str = "Other";
/// Value used for PhoneType when the source cell is empty.
pub const DEFAULT_PHONE_TYPE: &str = "Other";
/// Value used for PhoneNumber when the source cell is empty.
pub const DEFAULT_PHONE_NUMBER: &str = "000-000-0000";

/// The nine roster columns, in source and output order.
///
/// Both the ingestor and the output projector iterate [`UserField::ORDER`],
/// so the column contract lives in this one declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    BusinessTitle,
    OrganizationUnit,
    PhoneType,
    PhoneNumber,
    UserRoles,
    AccountName,
    EmailAddress,
}

impl UserField {
    /// Column order shared by the input and output layouts.
    pub const ORDER: [UserField; 9] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::BusinessTitle,
        UserField::OrganizationUnit,
        UserField::PhoneType,
        UserField::PhoneNumber,
        UserField::UserRoles,
        UserField::AccountName,
        UserField::EmailAddress,
    ];

    /// Field identifier used in notification messages.
    pub fn name(self) -> &'static str {
        match self {
            UserField::FirstName => "FirstName",
            UserField::LastName => "LastName",
            UserField::BusinessTitle => "BusinessTitle",
            UserField::OrganizationUnit => "OrganizationUnit",
            UserField::PhoneType => "PhoneType",
            UserField::PhoneNumber => "PhoneNumber",
            UserField::UserRoles => "UserRoles",
            UserField::AccountName => "AccountName",
            UserField::EmailAddress => "EmailAddress",
        }
    }

    /// Column title written to the output header row.
    pub fn title(self) -> &'static str {
        match self {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::BusinessTitle => "Business Title",
            UserField::OrganizationUnit => "Organization Unit",
            UserField::PhoneType => "Phone Type",
            UserField::PhoneNumber => "Phone Number",
            UserField::UserRoles => "User Roles",
            UserField::AccountName => "Account Name",
            UserField::EmailAddress => "Email Address",
        }
    }
}

/// One cleaned roster entry.
///
/// All fields are optional; absent fields serialize as empty cells in the
/// output workbook. AccountName is never absent once EmailAddress is set —
/// ingestion falls back to the email address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub business_title: Option<String>,
    pub organization_unit: Option<String>,
    pub phone_type: Option<String>,
    pub phone_number: Option<String>,
    pub user_roles: Option<String>,
    pub account_name: Option<String>,
    pub email_address: Option<String>,
}

impl User {
    /// Returns the current value of the given field.
    pub fn field(&self, field: UserField) -> Option<&str> {
        match field {
            UserField::FirstName => self.first_name.as_deref(),
            UserField::LastName => self.last_name.as_deref(),
            UserField::BusinessTitle => self.business_title.as_deref(),
            UserField::OrganizationUnit => self.organization_unit.as_deref(),
            UserField::PhoneType => self.phone_type.as_deref(),
            UserField::PhoneNumber => self.phone_number.as_deref(),
            UserField::UserRoles => self.user_roles.as_deref(),
            UserField::AccountName => self.account_name.as_deref(),
            UserField::EmailAddress => self.email_address.as_deref(),
        }
    }

    /// Sets or clears the given field.
    pub fn set_field(&mut self, field: UserField, value: Option<String>) {
        let slot = match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::BusinessTitle => &mut self.business_title,
            UserField::OrganizationUnit => &mut self.organization_unit,
            UserField::PhoneType => &mut self.phone_type,
            UserField::PhoneNumber => &mut self.phone_number,
            UserField::UserRoles => &mut self.user_roles,
            UserField::AccountName => &mut self.account_name,
            UserField::EmailAddress => &mut self.email_address,
        };
        *slot = value;
    }
}

/// One row of the compare-to reference list: directory key, canonical
/// account name, email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareEntry {
    pub key: String,
    pub account_name: String,
    pub email: String,
}

/// One row of the replace-to reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacePair {
    pub original: String,
    pub replacement: String,
}
