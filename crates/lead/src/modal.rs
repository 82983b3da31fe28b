use crate::{LeadFormController, LeadView};

type OnClose = Box<dyn Fn() + Send + Sync>;

/// Visibility wrapper around a lead form.
///
/// The host owns the `is_open` flag and passes it on every render; the shell
/// only remembers the previous value to detect the closed -> open edge, which
/// is when the form is reset.
pub struct ModalShell {
    controller: LeadFormController,
    was_open: bool,
    on_close: OnClose,
}

impl ModalShell {
    pub fn new(controller: LeadFormController, on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            controller,
            was_open: false,
            on_close: Box::new(on_close),
        }
    }

    /// `None` while closed: nothing is rendered, not even hidden markup.
    pub fn render(&mut self, is_open: bool) -> Option<LeadView> {
        if is_open && !self.was_open {
            tracing::debug!(variant = %self.controller.spec().variant(), "lead modal opened");
            self.controller.reset();
        }

        self.was_open = is_open;

        is_open.then(|| self.controller.view())
    }

    /// Backdrop click and close button. Does not touch a pending submission.
    pub fn request_close(&self) {
        (self.on_close)();
    }

    pub fn is_open(&self) -> bool {
        self.was_open
    }

    pub fn controller(&self) -> &LeadFormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LeadFormController {
        &mut self.controller
    }
}
