use crate::error::{LoadError, SubmitError};
use crate::form::FormState;
use crate::help;
use crate::host::HostDocument;
use crate::settings::{SettingsRecord, SettingsStore};

/// Lifecycle of one settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Constructed, nothing loaded yet
    Opened,
    /// Fields filled from the settings file or the defaults
    Populated,
    /// User is changing fields
    Editing,
    /// Submit in progress
    Validating,
    /// Last submit was refused; fields are unchanged
    RejectedInput,
    /// Settings written
    Saved,
    Closed,
}

impl DialogState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DialogState::Saved | DialogState::Closed)
    }
}

/// Form controller for the daylight settings dialog.
pub struct SettingsDialog<H: HostDocument> {
    store: SettingsStore,
    host: H,
    form: FormState,
    state: DialogState,
    load_error: Option<LoadError>,
}

impl<H: HostDocument> SettingsDialog<H> {
    /// Load the persisted settings and populate the form against the host's levels.
    pub fn open(store: SettingsStore, host: H) -> Self {
        let mut dialog = Self {
            store,
            host,
            form: FormState::default(),
            state: DialogState::Opened,
            load_error: None,
        };
        dialog.populate();
        dialog
    }

    fn populate(&mut self) {
        log::debug!("Settings dialog opened");
        let outcome = self.store.load();
        let levels = self.host.list_levels();
        if levels.is_empty() {
            log::warn!("Host document has no levels");
        }

        self.form = FormState::populate(levels, &outcome.record, &self.host);
        self.load_error = outcome.error;
        self.state = DialogState::Populated;
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access to the fields; moves the dialog into `Editing`.
    pub fn form_mut(&mut self) -> &mut FormState {
        if !self.state.is_terminal() {
            self.state = DialogState::Editing;
        }
        &mut self.form
    }

    /// Why the defaults were used on open, if they were.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Validate the fields and write the settings file.
    ///
    /// On failure nothing is written and the form keeps its contents.
    pub fn submit(&mut self) -> Result<SettingsRecord, SubmitError> {
        if self.state.is_terminal() {
            return Err(SubmitError::Closed);
        }
        self.state = DialogState::Validating;

        match self.try_submit() {
            Ok(record) => {
                self.state = DialogState::Saved;
                Ok(record)
            }
            Err(e) => {
                log::warn!("Submit rejected: {}", e);
                self.state = DialogState::RejectedInput;
                Err(e)
            }
        }
    }

    fn try_submit(&self) -> Result<SettingsRecord, SubmitError> {
        let validated = self.form.collect()?.validate()?;
        let record = validated.to_record(&self.host);
        self.store.save(&record)?;
        Ok(record)
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn open_help(&self) -> std::io::Result<()> {
        help::open_documentation()
    }
}
