use crate::domain::a008_directory::api;
use crate::shared::config::use_config;
use crate::shared::upload::upload_each;
use contracts::domain::a008_directory::aggregate::{
    set_default_bank, BankDetail, Branch, Directory, FieldError, KycDocumentKind, UploadedFile,
};
use contracts::shared::rows;
use leptos::prelude::*;
use web_sys::File;

/// Bank and branch lists keep at least one row.
const MIN_ROWS: usize = 1;

/// ViewModel for the directory entry form
#[derive(Clone, Copy)]
pub struct DirectoryDetailsVm {
    pub api_base: StoredValue<String>,

    pub form: RwSignal<Directory>,
    /// Field messages; filled on the first save attempt, then kept current
    pub errors: RwSignal<Vec<FieldError>>,
    pub submitted: RwSignal<bool>,

    pub active_tab: RwSignal<&'static str>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<Option<KycDocumentKind>>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl DirectoryDetailsVm {
    pub fn new() -> Self {
        Self {
            api_base: StoredValue::new(use_config().api_base),
            form: RwSignal::new(Directory::default()),
            errors: RwSignal::new(Vec::new()),
            submitted: RwSignal::new(false),
            active_tab: RwSignal::new("general"),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(None),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.id.is_some()))
    }

    /// Message for one field path such as `"address.email"`.
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| Directory::error_for(e, field)))
    }

    pub fn validate(&self) -> Result<(), String> {
        let errors = self.form.with_untracked(Directory::validation_errors);
        let first = errors.first().map(|e| e.message.clone());
        self.errors.set(errors);
        match first {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }

    pub fn load(&self, id: String) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        let base = self.api_base.get_value();

        leptos::task::spawn_local(async move {
            match api::fetch_directory(&base, &id).await {
                Ok(directory) => {
                    this.form.try_set(directory);
                }
                Err(e) => {
                    this.error.try_set(Some(format!("Failed to load directory entry: {}", e)));
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn save(&self, on_saved: Callback<()>) {
        self.submitted.set(true);
        if let Err(msg) = self.validate() {
            self.error.set(Some(msg));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        this.success.set(None);
        let directory = this.form.get_untracked();
        let base = self.api_base.get_value();

        leptos::task::spawn_local(async move {
            match api::save_directory(&base, &directory).await {
                Ok(saved) => {
                    if this.form.try_set(saved).is_some() {
                        return;
                    }
                    this.success.try_set(Some("Directory entry saved".into()));
                    on_saved.run(());
                }
                Err(e) => {
                    this.error.try_set(Some(format!("Save failed: {}", e)));
                }
            }
            this.saving.try_set(false);
        });
    }

    // === Commands ===

    /// Edit the form; once a save was attempted the field messages follow.
    /// A disposed form ignores the edit.
    pub fn update(&self, f: impl FnOnce(&mut Directory)) {
        if self.form.try_update(f).is_none() {
            return;
        }
        if self.submitted.try_get_untracked().unwrap_or(false) {
            if let Some(errors) = self.form.try_with_untracked(Directory::validation_errors) {
                self.errors.try_set(errors);
            }
        }
    }

    pub fn update_bank(&self, index: usize, f: impl FnOnce(&mut BankDetail)) {
        self.update(|d| d.bank_details = rows::update_row(&d.bank_details, index, f));
    }

    pub fn add_bank(&self) {
        self.update(|d| d.bank_details = rows::push_row(&d.bank_details, BankDetail::default()));
    }

    pub fn remove_bank(&self, index: usize) {
        self.update(|d| d.bank_details = rows::remove_row(&d.bank_details, index, MIN_ROWS));
    }

    pub fn make_default_bank(&self, index: usize) {
        self.update(|d| d.bank_details = set_default_bank(&d.bank_details, index));
    }

    pub fn update_branch(&self, index: usize, f: impl FnOnce(&mut Branch)) {
        self.update(|d| d.branch_info = rows::update_row(&d.branch_info, index, f));
    }

    pub fn add_branch(&self) {
        self.update(|d| d.branch_info = rows::push_row(&d.branch_info, Branch::default()));
    }

    pub fn copy_branch(&self, index: usize) {
        self.update(|d| d.branch_info = rows::duplicate_row(&d.branch_info, index));
    }

    pub fn remove_branch(&self, index: usize) {
        self.update(|d| d.branch_info = rows::remove_row(&d.branch_info, index, MIN_ROWS));
    }

    /// Upload files one by one into the folder of `kind` and append the
    /// stored URLs to that document's file list.
    pub fn upload_kyc(&self, kind: KycDocumentKind, files: Vec<File>) {
        if files.is_empty() {
            return;
        }
        let this = *self;
        this.uploading.set(Some(kind));
        let base = self.api_base.get_value();

        leptos::task::spawn_local(async move {
            let uploaded = upload_each(&base, kind.folder(), files).await;
            this.apply_uploaded(kind, uploaded);
        });
    }

    fn apply_uploaded(&self, kind: KycDocumentKind, uploaded: Vec<UploadedFile>) {
        if !uploaded.is_empty() {
            self.update(|d| {
                let upload = d.kyc_documents.get(kind).with_files(uploaded);
                d.kyc_documents = d.kyc_documents.with(kind, upload);
            });
        }
        self.uploading.try_set(None);
    }

    pub fn remove_kyc_file(&self, kind: KycDocumentKind, index: usize) {
        self.update(|d| {
            let upload = d.kyc_documents.get(kind).without_file(index);
            d.kyc_documents = d.kyc_documents.with(kind, upload);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use contracts::shared::lookup::LookupConfig;

    fn vm_in(owner: &Owner) -> DirectoryDetailsVm {
        owner.with(|| {
            provide_context(AppConfig {
                api_base: "http://test/api".into(),
                lookup: LookupConfig::default(),
            });
            DirectoryDetailsVm::new()
        })
    }

    fn pan_copy() -> Vec<UploadedFile> {
        vec![UploadedFile {
            url: "http://test/uploads/pan/pan.pdf".into(),
            name: "pan.pdf".into(),
        }]
    }

    #[test]
    fn test_uploaded_files_are_appended() {
        let owner = Owner::new();
        let vm = vm_in(&owner);
        vm.uploading.set(Some(KycDocumentKind::CopyOfPanAllotment));

        vm.apply_uploaded(KycDocumentKind::CopyOfPanAllotment, pan_copy());
        let upload = vm
            .form
            .with_untracked(|d| d.kyc_documents.get(KycDocumentKind::CopyOfPanAllotment).clone());
        assert!(upload.uploaded);
        assert_eq!(upload.files.len(), 1);
        assert_eq!(vm.uploading.get_untracked(), None);
    }

    #[test]
    fn test_upload_finishing_after_form_closed_is_dropped() {
        let owner = Owner::new();
        let vm = vm_in(&owner);
        vm.submitted.set(true);
        owner.cleanup();

        vm.apply_uploaded(KycDocumentKind::CopyOfPanAllotment, pan_copy());
        vm.update(|d| d.alias = "ACME".into());
        assert_eq!(vm.form.try_get_untracked(), None);
    }
}
