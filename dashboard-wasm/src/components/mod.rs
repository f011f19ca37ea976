pub(crate) mod confirm_dialog;
pub(crate) mod modal;
pub(crate) mod post_form;
pub(crate) mod posts_panel;
pub(crate) mod user_form;
pub(crate) mod users_panel;
