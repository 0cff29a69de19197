use crate::projects::{self, ProjectInfo};

pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn class(self) -> Option<&'static str> {
        self.is_open().then_some(ACTIVE_CLASS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Demo,
    Project,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    OpenDemo,
    CloseDemo,
    OpenProject(String),
    CloseProject,
    /// Click whose target is the modal container itself, not its content.
    Backdrop(ModalKind),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageModals {
    pub demo: ModalState,
    pub project: ModalState,
    /// Last project injected into the detail modal; kept after closing.
    pub project_info: Option<&'static ProjectInfo>,
}

impl PageModals {
    pub fn apply(self, action: &ModalAction) -> Self {
        match action {
            ModalAction::OpenDemo => Self {
                demo: ModalState::Open,
                ..self
            },
            ModalAction::CloseDemo | ModalAction::Backdrop(ModalKind::Demo) => Self {
                demo: ModalState::Closed,
                ..self
            },
            ModalAction::OpenProject(raw_id) => match projects::lookup_attr(raw_id) {
                Some(info) => Self {
                    project: ModalState::Open,
                    project_info: Some(info),
                    ..self
                },
                None => self,
            },
            ModalAction::CloseProject | ModalAction::Backdrop(ModalKind::Project) => Self {
                project: ModalState::Closed,
                ..self
            },
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.demo.is_open() || self.project.is_open()
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() {
            "hidden"
        } else {
            ""
        }
    }
}
