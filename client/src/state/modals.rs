//! Open/closed state for the header's modal dialogs.
//!
//! DESIGN
//! ======
//! Each modal toggles independently; opening one does not close another.

#[cfg(test)]
#[path = "modals_test.rs"]
mod modals_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    AddArticle,
    Login,
    Register,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub add_article: bool,
    pub login: bool,
    pub register: bool,
}

impl ModalState {
    fn slot(&mut self, modal: Modal) -> &mut bool {
        match modal {
            Modal::AddArticle => &mut self.add_article,
            Modal::Login => &mut self.login,
            Modal::Register => &mut self.register,
        }
    }

    #[must_use]
    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::AddArticle => self.add_article,
            Modal::Login => self.login,
            Modal::Register => self.register,
        }
    }

    pub fn open(&mut self, modal: Modal) {
        *self.slot(modal) = true;
    }

    pub fn close(&mut self, modal: Modal) {
        *self.slot(modal) = false;
    }
}
