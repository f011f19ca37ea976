use std::io::{self, Write};

use dashboard_core::{
    ConfirmDialog, Dashboard, FetchStatus, NO_AUTHOR, PostForm, PostField, Tab, User, UserField,
    UserForm, ValidationErrors, author_option_label, forms::CANCEL_LABEL,
};

const HEADING: &str = "User Management Dashboard";

/// Страница целиком: заголовок, вкладки, список и открытое окно.
pub(crate) fn page(dashboard: &Dashboard, out: &mut impl Write) -> io::Result<()> {
    match dashboard.status() {
        FetchStatus::Loading => writeln!(out, "Loading data..."),
        FetchStatus::Failed { message } => {
            writeln!(out, "Error")?;
            writeln!(out, "{message}")?;
            writeln!(out, "Введите `reload`, чтобы повторить.")
        }
        FetchStatus::Ready => {
            header(dashboard, out)?;
            match dashboard.tab() {
                Tab::Users => users(dashboard, out)?,
                Tab::Posts => posts(dashboard, out)?,
            }
            modal(dashboard, out)
        }
    }
}

fn header(dashboard: &Dashboard, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADING}")?;

    let tabs: Vec<String> = [Tab::Users, Tab::Posts]
        .into_iter()
        .map(|tab| {
            let label = dashboard.tab_label(tab);
            if tab == dashboard.tab() {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    if dashboard.search_term().is_empty() {
        writeln!(out, "{}", dashboard.search_placeholder())
    } else {
        writeln!(out, "search: {:?}", dashboard.search_term())
    }
}

fn users(dashboard: &Dashboard, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Users  (+ Add User: `add`)")?;
    let cards = dashboard.user_cards();
    if cards.is_empty() {
        return writeln!(out, "  (ничего не найдено)");
    }
    for card in cards {
        writeln!(
            out,
            "  #{:<4} ({}) {}  {}  {}  | {}",
            card.id,
            card.initial,
            card.name,
            card.handle,
            card.email,
            card.post_count_label()
        )?;
    }
    Ok(())
}

fn posts(dashboard: &Dashboard, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Posts  (+ Add Post: `add`)")?;
    let cards = dashboard.post_cards();
    if cards.is_empty() {
        return writeln!(out, "  (ничего не найдено)");
    }
    for card in cards {
        writeln!(out, "  #{:<4} {}  | {}", card.id, card.title_preview, card.byline())?;
    }
    Ok(())
}

/// Открытое окно, если оно есть.
pub(crate) fn modal(dashboard: &Dashboard, out: &mut impl Write) -> io::Result<()> {
    if let Some(modal) = dashboard.user_modal() {
        writeln!(out, "== {} ==", modal.title())?;
        return user_form(modal.into_content(), out);
    }
    if let Some(modal) = dashboard.post_modal() {
        writeln!(out, "== {} ==", modal.title())?;
        return post_form(modal.into_content(), dashboard.store().users(), out);
    }
    if let Some(dialog) = dashboard.confirm_dialog() {
        return confirm_dialog(&dialog, out);
    }
    Ok(())
}

fn user_form(form: &UserForm, out: &mut impl Write) -> io::Result<()> {
    for field in UserField::ALL {
        writeln!(out, "  {:<9} {}", format!("{field}*:"), form.value(field))?;
        field_error(form.errors(), field.as_str(), out)?;
    }
    buttons(form.controls_enabled(false), form.submit_label(false), out)
}

fn post_form(form: &PostForm, users: &[User], out: &mut impl Write) -> io::Result<()> {
    let selected = form.draft().user_id;
    writeln!(out, "  {}*:", PostField::UserId)?;
    let marker = |id: i64| if id == selected { ">" } else { " " };
    writeln!(out, "    {} {} Select a user", marker(NO_AUTHOR), NO_AUTHOR)?;
    for user in users {
        writeln!(out, "    {} {} {}", marker(user.id), user.id, author_option_label(user))?;
    }
    field_error(form.errors(), PostField::UserId.as_str(), out)?;

    writeln!(out, "  {}*: {}", PostField::Title, form.draft().title)?;
    field_error(form.errors(), PostField::Title.as_str(), out)?;

    buttons(form.controls_enabled(false), form.submit_label(false), out)
}

fn confirm_dialog(dialog: &ConfirmDialog, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} == ({})", dialog.title(), dialog.severity())?;
    writeln!(out, "{}", dialog.message())?;
    if !dialog.buttons_enabled(false) {
        return writeln!(out, "  {}", dialog.confirm_label(true));
    }
    writeln!(
        out,
        "[{}: `confirm`] [{}: `cancel`]",
        dialog.confirm_label(false),
        dialog.cancel_text()
    )
}

fn field_error(errors: &ValidationErrors, field: &str, out: &mut impl Write) -> io::Result<()> {
    match errors.get(field) {
        Some(message) => writeln!(out, "      ! {message}"),
        None => Ok(()),
    }
}

fn buttons(enabled: bool, submit_label: &str, out: &mut impl Write) -> io::Result<()> {
    if !enabled {
        return writeln!(out, "  {submit_label}");
    }
    writeln!(out, "  [{submit_label}: `submit`] [{CANCEL_LABEL}: `cancel`]")
}
