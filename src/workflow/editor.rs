use super::definition::Definition;
use crate::error::EditorError;
use crate::schema::{FormSchema, ParamsSchema, SchemaOptions, parse_fixed_params};
use log::debug;

struct Session {
    step_id: String,
    form: FormSchema,
    params: ParamsSchema,
}

/// Owns the editable schemas for the currently selected step.
///
/// Selecting another step discards the current session and builds a new one.
/// Closing without [`TaskEditor::save`] drops all edits.
#[derive(Default)]
pub struct TaskEditor {
    options: SchemaOptions,
    session: Option<Session>,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SchemaOptions) -> Self {
        Self {
            options,
            session: None,
        }
    }

    /// Rebuilds the schemas for `step_id`. On an unknown id the previous
    /// session is still discarded.
    pub fn on_selection_changed(
        &mut self,
        definition: &Definition,
        step_id: &str,
    ) -> Result<(), EditorError> {
        if let Some(previous) = self.session.take() {
            debug!("discarding editor session for step '{}'", previous.step_id);
        }
        let step = definition
            .find_step(step_id)
            .ok_or_else(|| EditorError::StepNotFound(step_id.to_string()))?;

        let form = FormSchema::builder(&step.properties.model)
            .with_options(self.options.clone())
            .build();
        let params = parse_fixed_params(&step.properties.fixed_model);
        debug!("opened editor session for step '{}'", step_id);

        self.session = Some(Session {
            step_id: step_id.to_string(),
            form,
            params,
        });
        Ok(())
    }

    pub fn selected_step_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.step_id.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn form(&self) -> Result<&FormSchema, EditorError> {
        self.session
            .as_ref()
            .map(|s| &s.form)
            .ok_or(EditorError::NoStepSelected)
    }

    pub fn form_mut(&mut self) -> Result<&mut FormSchema, EditorError> {
        self.session
            .as_mut()
            .map(|s| &mut s.form)
            .ok_or(EditorError::NoStepSelected)
    }

    pub fn params(&self) -> Result<&ParamsSchema, EditorError> {
        self.session
            .as_ref()
            .map(|s| &s.params)
            .ok_or(EditorError::NoStepSelected)
    }

    pub fn params_mut(&mut self) -> Result<&mut ParamsSchema, EditorError> {
        self.session
            .as_mut()
            .map(|s| &mut s.params)
            .ok_or(EditorError::NoStepSelected)
    }

    /// Writes the edited properties and parameters back onto the selected step.
    pub fn save(&self, definition: &mut Definition) -> Result<(), EditorError> {
        let session = self.session.as_ref().ok_or(EditorError::NoStepSelected)?;
        let step = definition
            .find_step_mut(&session.step_id)
            .ok_or_else(|| EditorError::StepNotFound(session.step_id.clone()))?;

        step.properties.model = session.form.to_property_object();
        step.properties.fixed_model = session.params.to_fixed_params();
        debug!("saved editor session for step '{}'", session.step_id);
        Ok(())
    }

    /// Ends the session without writing anything back.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("closed editor session for step '{}'", session.step_id);
        }
    }
}
