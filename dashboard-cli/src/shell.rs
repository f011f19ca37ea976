use std::io::{self, BufRead, Write};

use dashboard_core::{Dashboard, DashboardError, DataSource, Deleted, PostField, Tab, UserField};

use crate::render;

const PROMPT: &str = "> ";

const HELP: &str = "\
Команды:
  users | posts          переключить вкладку
  search [текст]         поиск (без текста сбрасывает фильтр)
  list                   показать текущую вкладку
  add                    форма создания
  edit <id>              форма редактирования
  delete <id>            удаление с подтверждением
  set <поле> <значение>  изменить поле открытой формы
  submit                 сохранить форму
  confirm                подтвердить удаление
  cancel                 закрыть окно без сохранения
  show                   показать открытое окно
  reload                 загрузить данные заново
  help                   эта справка
  quit                   выход";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Tab(Tab),
    Search(String),
    List,
    Add,
    Edit(i64),
    Delete(i64),
    Set { field: String, value: String },
    Submit,
    Confirm,
    Cancel,
    Show,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Разбирает строку ввода. Пустая строка даёт `Ok(None)`.
pub(crate) fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "users" => ShellCommand::Tab(Tab::Users),
        "posts" => ShellCommand::Tab(Tab::Posts),
        "search" => ShellCommand::Search(rest.to_string()),
        "list" | "ls" => ShellCommand::List,
        "add" | "new" => ShellCommand::Add,
        "edit" => ShellCommand::Edit(parse_id(rest)?),
        "delete" | "rm" => ShellCommand::Delete(parse_id(rest)?),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err("использование: set <поле> <значение>".to_string());
            }
            ShellCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "submit" | "save" => ShellCommand::Submit,
        "confirm" | "yes" => ShellCommand::Confirm,
        "cancel" | "close" | "no" => ShellCommand::Cancel,
        "show" => ShellCommand::Show,
        "reload" | "retry" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("неизвестная команда: {other} (см. `help`)")),
    };
    Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("ожидался числовой id, получено {raw:?}"))
}

/// Интерактивная сессия: одна панель, один источник данных.
pub(crate) struct Session<'a, S: DataSource + ?Sized> {
    source: &'a S,
    dashboard: Dashboard,
}

impl<'a, S: DataSource + ?Sized> Session<'a, S> {
    pub(crate) fn new(source: &'a S) -> Self {
        Self {
            source,
            dashboard: Dashboard::new(),
        }
    }

    pub(crate) fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub(crate) async fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        render::page(&self.dashboard, out)?;
        self.dashboard.load(self.source).await;
        render::page(&self.dashboard, out)
    }

    pub(crate) async fn execute(
        &mut self,
        command: ShellCommand,
        out: &mut impl Write,
    ) -> io::Result<Flow> {
        match command {
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Reload => {
                self.dashboard.reload();
                self.start(out).await?;
            }
            _ if !self.dashboard.is_ready() => render::page(&self.dashboard, out)?,
            ShellCommand::Tab(tab) => {
                self.dashboard.set_tab(tab);
                render::page(&self.dashboard, out)?;
            }
            ShellCommand::Search(term) => {
                self.dashboard.set_search(term);
                render::page(&self.dashboard, out)?;
            }
            ShellCommand::List => render::page(&self.dashboard, out)?,
            ShellCommand::Add => {
                let opened = match self.dashboard.tab() {
                    Tab::Users => self.dashboard.open_user_form(None),
                    Tab::Posts => self.dashboard.open_post_form(None),
                };
                self.show_or_report(opened, out)?;
            }
            ShellCommand::Edit(id) => {
                let opened = match self.dashboard.tab() {
                    Tab::Users => self.dashboard.open_user_form(Some(id)),
                    Tab::Posts => self.dashboard.open_post_form(Some(id)),
                };
                self.show_or_report(opened, out)?;
            }
            ShellCommand::Delete(id) => {
                let kind = self.dashboard.tab().kind();
                let opened = self.dashboard.open_delete_dialog(kind, id);
                self.show_or_report(opened, out)?;
            }
            ShellCommand::Set { field, value } => {
                let updated = self.set_field(&field, &value);
                self.show_or_report(updated, out)?;
            }
            ShellCommand::Submit => self.submit(out)?,
            ShellCommand::Confirm => match self.dashboard.confirm_delete() {
                Ok(Deleted::User(summary)) => {
                    writeln!(
                        out,
                        "Пользователь удалён: id={} (постов удалено: {})",
                        summary.user.id, summary.posts_removed
                    )?;
                    render::page(&self.dashboard, out)?;
                }
                Ok(Deleted::Post(post)) => {
                    writeln!(out, "Пост удалён: id={}", post.id)?;
                    render::page(&self.dashboard, out)?;
                }
                Err(err) => report(&err, out)?,
            },
            ShellCommand::Cancel => {
                self.dashboard.close_all();
                render::page(&self.dashboard, out)?;
            }
            ShellCommand::Show => {
                if self.dashboard.active_modal().is_none() {
                    writeln!(out, "Нет открытых окон")?;
                } else {
                    render::modal(&self.dashboard, out)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), DashboardError> {
        if let Some(form) = self.dashboard.user_form_mut() {
            form.set_field(field.parse::<UserField>()?, value);
            return Ok(());
        }
        if let Some(form) = self.dashboard.post_form_mut() {
            form.set_field(field.parse::<PostField>()?, value);
            return Ok(());
        }
        Err(DashboardError::NoActiveForm(self.dashboard.tab().kind()))
    }

    fn submit(&mut self, out: &mut impl Write) -> io::Result<()> {
        let saved = if self.dashboard.is_user_modal_open() {
            self.dashboard
                .submit_user_form()
                .map(|user| format!("Пользователь сохранён: id={}", user.id))
        } else if self.dashboard.is_post_modal_open() {
            self.dashboard
                .submit_post_form()
                .map(|post| format!("Пост сохранён: id={}", post.id))
        } else {
            Err(DashboardError::NoActiveForm(self.dashboard.tab().kind()))
        };

        match saved {
            Ok(message) => {
                writeln!(out, "{message}")?;
                render::page(&self.dashboard, out)
            }
            // Ошибки уже лежат в форме, показываем её заново.
            Err(DashboardError::Validation(_)) => render::modal(&self.dashboard, out),
            Err(err) => report(&err, out),
        }
    }

    fn show_or_report(
        &self,
        result: Result<(), DashboardError>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        match result {
            Ok(()) => render::modal(&self.dashboard, out),
            Err(err) => report(&err, out),
        }
    }
}

fn report(err: &DashboardError, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "! {err}")
}

/// Читает команды до `quit` или конца ввода. Возвращает итоговое состояние панели.
pub(crate) async fn run<S, R, W>(source: &S, input: R, mut out: W) -> io::Result<Dashboard>
where
    S: DataSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(source);
    session.start(&mut out).await?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if session.execute(command, &mut out).await? == Flow::Quit {
                    break;
                }
            }
            Err(message) => writeln!(out, "! {message}")?,
        }
        prompt(&mut out)?;
    }

    Ok(session.dashboard().clone())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}
