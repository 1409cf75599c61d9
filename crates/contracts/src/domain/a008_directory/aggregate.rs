use crate::shared::lookup::LookupItem;
use crate::shared::rows;
use serde::{Deserialize, Serialize};

// ============================================================================
// Nested blocks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralInfo {
    /// Company, Partnership, LLP or Proprietorship
    pub entity_type: String,
    pub company_name: String,
    pub msme_registered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address_line: String,
    pub postal_code: String,
    pub telephone: String,
    pub fax: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDetails {
    pub bin_no: String,
    pub ie_code: String,
    pub pan_no: String,
    pub gstin_main_branch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branch {
    pub branch_code: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for Branch {
    fn default() -> Self {
        Self {
            branch_code: String::new(),
            address: String::new(),
            city: String::new(),
            district: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: "India".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetail {
    pub entity_name: String,
    pub branch_location: String,
    pub account_number: String,
    pub ad_code: String,
    pub is_default: bool,
}

/// Mark row `index` as the default account and clear the flag elsewhere.
pub fn set_default_bank(banks: &[BankDetail], index: usize) -> Vec<BankDetail> {
    if index >= banks.len() {
        return banks.to_vec();
    }
    banks
        .iter()
        .enumerate()
        .map(|(i, bank)| BankDetail {
            is_default: i == index,
            ..bank.clone()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedFile {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocumentUpload {
    pub uploaded: bool,
    pub files: Vec<UploadedFile>,
}

impl DocumentUpload {
    /// Append newly uploaded files.
    pub fn with_files(&self, files: Vec<UploadedFile>) -> Self {
        let mut all = self.files.clone();
        all.extend(files);
        Self {
            uploaded: !all.is_empty(),
            files: all,
        }
    }

    pub fn without_file(&self, index: usize) -> Self {
        let files = rows::remove_row(&self.files, index, 0);
        Self {
            uploaded: !files.is_empty(),
            files,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycDocumentKind {
    CertificateOfIncorporation,
    MemorandumOfAssociation,
    ArticlesOfAssociation,
    PowerOfAttorney,
    CopyOfPanAllotment,
    CopyOfTelephoneBill,
    GstRegistrationCopy,
    BalanceSheet,
}

impl KycDocumentKind {
    pub const ALL: [KycDocumentKind; 8] = [
        KycDocumentKind::CertificateOfIncorporation,
        KycDocumentKind::MemorandumOfAssociation,
        KycDocumentKind::ArticlesOfAssociation,
        KycDocumentKind::PowerOfAttorney,
        KycDocumentKind::CopyOfPanAllotment,
        KycDocumentKind::CopyOfTelephoneBill,
        KycDocumentKind::GstRegistrationCopy,
        KycDocumentKind::BalanceSheet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KycDocumentKind::CertificateOfIncorporation => "Certificate of Incorporation",
            KycDocumentKind::MemorandumOfAssociation => "Memorandum of Association",
            KycDocumentKind::ArticlesOfAssociation => "Articles of Association",
            KycDocumentKind::PowerOfAttorney => "Power of Attorney",
            KycDocumentKind::CopyOfPanAllotment => "Copy of PAN Allotment",
            KycDocumentKind::CopyOfTelephoneBill => "Copy of Telephone Bill",
            KycDocumentKind::GstRegistrationCopy => "GST Registration Copy",
            KycDocumentKind::BalanceSheet => "Balance Sheet",
        }
    }

    /// Folder name sent to the upload proxy.
    pub fn folder(self) -> &'static str {
        match self {
            KycDocumentKind::CertificateOfIncorporation => "certificateOfIncorporation",
            KycDocumentKind::MemorandumOfAssociation => "memorandumOfAssociation",
            KycDocumentKind::ArticlesOfAssociation => "articlesOfAssociation",
            KycDocumentKind::PowerOfAttorney => "powerOfAttorney",
            KycDocumentKind::CopyOfPanAllotment => "copyOfPanAllotment",
            KycDocumentKind::CopyOfTelephoneBill => "copyOfTelephoneBill",
            KycDocumentKind::GstRegistrationCopy => "gstRegistrationCopy",
            KycDocumentKind::BalanceSheet => "balanceSheet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct KycDocuments {
    pub certificate_of_incorporation: DocumentUpload,
    pub memorandum_of_association: DocumentUpload,
    pub articles_of_association: DocumentUpload,
    pub power_of_attorney: DocumentUpload,
    pub copy_of_pan_allotment: DocumentUpload,
    pub copy_of_telephone_bill: DocumentUpload,
    pub gst_registration_copy: DocumentUpload,
    pub balance_sheet: DocumentUpload,
}

impl KycDocuments {
    pub fn get(&self, kind: KycDocumentKind) -> &DocumentUpload {
        match kind {
            KycDocumentKind::CertificateOfIncorporation => &self.certificate_of_incorporation,
            KycDocumentKind::MemorandumOfAssociation => &self.memorandum_of_association,
            KycDocumentKind::ArticlesOfAssociation => &self.articles_of_association,
            KycDocumentKind::PowerOfAttorney => &self.power_of_attorney,
            KycDocumentKind::CopyOfPanAllotment => &self.copy_of_pan_allotment,
            KycDocumentKind::CopyOfTelephoneBill => &self.copy_of_telephone_bill,
            KycDocumentKind::GstRegistrationCopy => &self.gst_registration_copy,
            KycDocumentKind::BalanceSheet => &self.balance_sheet,
        }
    }

    /// Copy with the upload block of `kind` replaced.
    pub fn with(&self, kind: KycDocumentKind, upload: DocumentUpload) -> Self {
        let mut next = self.clone();
        let slot = match kind {
            KycDocumentKind::CertificateOfIncorporation => &mut next.certificate_of_incorporation,
            KycDocumentKind::MemorandumOfAssociation => &mut next.memorandum_of_association,
            KycDocumentKind::ArticlesOfAssociation => &mut next.articles_of_association,
            KycDocumentKind::PowerOfAttorney => &mut next.power_of_attorney,
            KycDocumentKind::CopyOfPanAllotment => &mut next.copy_of_pan_allotment,
            KycDocumentKind::CopyOfTelephoneBill => &mut next.copy_of_telephone_bill,
            KycDocumentKind::GstRegistrationCopy => &mut next.gst_registration_copy,
            KycDocumentKind::BalanceSheet => &mut next.balance_sheet,
        };
        *slot = upload;
        next
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Trading entity of the export directory (exporter, consignee, buyer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Directory {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub organization: String,
    pub alias: String,
    pub approval_status: String,
    pub general_info: GeneralInfo,
    pub address: Address,
    pub registration_details: RegistrationDetails,
    pub kyc_documents: KycDocuments,
    pub branch_info: Vec<Branch>,
    pub bank_details: Vec<BankDetail>,
    pub notes: String,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            id: None,
            organization: String::new(),
            alias: String::new(),
            approval_status: "Pending".to_string(),
            general_info: GeneralInfo::default(),
            address: Address::default(),
            registration_details: RegistrationDetails::default(),
            kyc_documents: KycDocuments::default(),
            branch_info: vec![Branch::default()],
            bank_details: vec![BankDetail::default()],
            notes: String::new(),
        }
    }
}

/// Validation message bound to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !email.chars().any(char::is_whitespace)
}

/// Required text field with an upper length bound.
fn check_required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    max: usize,
) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    } else {
        check_max_len(errors, field, label, value, max);
    }
}

fn check_max_len(errors: &mut Vec<FieldError>, field: &'static str, label: &str, value: &str, max: usize) {
    if value.trim().chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("{} must be at most {} characters", label, max),
        ));
    }
}

impl Directory {
    /// All field-level problems, in form order.
    pub fn validation_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_required(&mut errors, "organization", "Organization", &self.organization, 255);
        check_required(&mut errors, "alias", "Alias", &self.alias, 50);

        if self.general_info.entity_type.trim().is_empty() {
            errors.push(FieldError::new("generalInfo.entityType", "Entity Type is required"));
        }
        check_required(
            &mut errors,
            "generalInfo.companyName",
            "Company Name",
            &self.general_info.company_name,
            255,
        );

        check_required(&mut errors, "address.addressLine", "Address", &self.address.address_line, 500);
        check_required(&mut errors, "address.postalCode", "Postal Code", &self.address.postal_code, 10);
        let email = self.address.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(FieldError::new("address.email", "Invalid email address"));
        } else {
            check_max_len(&mut errors, "address.email", "Email", email, 255);
        }

        let registration = &self.registration_details;
        check_required(&mut errors, "registrationDetails.ieCode", "IE Code", &registration.ie_code, 20);
        check_required(&mut errors, "registrationDetails.panNo", "PAN No", &registration.pan_no, 10);

        errors
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.validation_errors().into_iter().next() {
            Some(error) => Err(error.message),
            None => Ok(()),
        }
    }

    pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
        errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    }
}

/// Directory row offered by the exporter / consignee lookups.
impl LookupItem for Directory {
    fn search_label(&self) -> String {
        format!(
            "{} {} {}",
            self.organization, self.alias, self.registration_details.ie_code
        )
    }

    fn display_value(&self) -> String {
        self.organization.to_uppercase()
    }

    fn hint(&self) -> Option<String> {
        let ie = self.registration_details.ie_code.trim();
        (!ie.is_empty()).then(|| format!("IEC {}", ie))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Directory {
        Directory {
            organization: "Shree Exports Pvt. Ltd.".into(),
            alias: "SHREE".into(),
            general_info: GeneralInfo {
                entity_type: "Company".into(),
                company_name: "Shree Exports".into(),
                msme_registered: false,
            },
            address: Address {
                address_line: "12 Ring Road".into(),
                postal_code: "380015".into(),
                email: "accounts@shree.example".into(),
                ..Default::default()
            },
            registration_details: RegistrationDetails {
                ie_code: "0305012345".into(),
                pan_no: "ABCDE1234F".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_directory() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_required_fields_reported_per_field() {
        let errors = Directory::default().validation_errors();
        assert_eq!(
            Directory::error_for(&errors, "organization").as_deref(),
            Some("Organization is required")
        );
        assert!(Directory::error_for(&errors, "registrationDetails.ieCode").is_some());
        assert!(Directory::error_for(&errors, "address.email").is_none());
    }

    #[test]
    fn test_organization_accepts_any_characters_and_email_is_checked() {
        let mut d = valid();
        d.organization = "ACME EXPORTS [INDIA] PVT LTD".into();
        d.address.email = "not-an-email".into();
        let errors = d.validation_errors();
        assert!(Directory::error_for(&errors, "organization").is_none());
        assert_eq!(
            Directory::error_for(&errors, "address.email").as_deref(),
            Some("Invalid email address")
        );
    }

    #[test]
    fn test_ie_code_length() {
        let mut d = valid();
        d.registration_details.ie_code = "IEC-0305-12".into();
        assert_eq!(d.validate(), Ok(()));

        d.registration_details.ie_code = "1".repeat(21);
        assert_eq!(
            d.validate(),
            Err("IE Code must be at most 20 characters".to_string())
        );
    }

    #[test]
    fn test_field_length_limits() {
        let mut d = valid();
        d.organization = "O".repeat(256);
        d.general_info.company_name = "C".repeat(256);
        d.address.address_line = "A".repeat(501);
        d.address.postal_code = "38001500000".into();
        d.address.email = format!("{}@shree.example", "a".repeat(250));
        let errors = d.validation_errors();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "organization",
                "generalInfo.companyName",
                "address.addressLine",
                "address.postalCode",
                "address.email",
            ]
        );

        d.address.postal_code = "3800150000".into();
        assert!(Directory::error_for(&d.validation_errors(), "address.postalCode").is_none());
    }

    #[test]
    fn test_single_default_bank() {
        let banks = vec![
            BankDetail {
                is_default: true,
                ..Default::default()
            },
            BankDetail::default(),
        ];
        let next = set_default_bank(&banks, 1);
        assert!(!next[0].is_default);
        assert!(next[1].is_default);
        assert!(banks[0].is_default);
    }

    #[test]
    fn test_kyc_upload_append_and_remove() {
        let docs = KycDocuments::default();
        let upload = docs.get(KycDocumentKind::BalanceSheet).with_files(vec![UploadedFile {
            url: "https://files.example/kyc/bs.pdf".into(),
            name: "bs.pdf".into(),
        }]);
        let docs = docs.with(KycDocumentKind::BalanceSheet, upload);
        assert!(docs.balance_sheet.uploaded);
        assert_eq!(docs.balance_sheet.files.len(), 1);

        let cleared = docs.get(KycDocumentKind::BalanceSheet).without_file(0);
        assert!(!cleared.uploaded);
    }

    #[test]
    fn test_deserialize_partial_payload() {
        let d: Directory = serde_json::from_str(
            r#"{"_id": "abc", "organization": "Acme", "branchInfo": [{"city": "Surat"}]}"#,
        )
        .unwrap();
        assert_eq!(d.id.as_deref(), Some("abc"));
        assert_eq!(d.branch_info[0].country, "India");
        assert!(d.bank_details.is_empty() || d.bank_details.len() == 1);
    }
}
