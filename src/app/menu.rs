use crate::app::render;
use crate::core::loader::CourseLoader;
use crate::core::queries::{find_course, list_courses};
use crate::domain::catalog::CourseTable;
use crate::domain::ports::CourseSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_path;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the Course Planner!\n\n";
pub const MENU: &str = "1. Load Data Structure\n\
                        2. Print Course List\n\
                        3. Print Course\n\
                        9. Exit\n\n\
                        What would you like to do? ";
pub const FAREWELL: &str = "Goodbye, have a fabulous day!\n";
pub const NOT_A_NUMBER: &str = "Please enter a number from the menu.\n\n";
pub const FILE_PROMPT: &str = "CSV file name: ";
pub const COURSE_PROMPT: &str = "Enter a course number (e.g. CSCI400): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Lookup,
    Exit,
    Unknown(i64),
    NotANumber(String),
}

impl MenuChoice {
    /// 只看第一個 token，同一行其餘內容丟棄
    pub fn parse(line: &str) -> Self {
        let token = line.split_whitespace().next().unwrap_or("");
        match token.parse::<i64>() {
            Ok(1) => MenuChoice::Load,
            Ok(2) => MenuChoice::List,
            Ok(3) => MenuChoice::Lookup,
            Ok(9) => MenuChoice::Exit,
            Ok(other) => MenuChoice::Unknown(other),
            Err(_) => MenuChoice::NotANumber(line.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Exiting,
}

/// Interactive session over any line-based input and any output.
///
/// Owns the course table; loads replace it wholesale, queries only read it.
pub struct AdvisorMenu<S: CourseSource, R: BufRead, W: Write> {
    loader: CourseLoader<S>,
    table: CourseTable,
    default_file: Option<String>,
    input: R,
    output: W,
    state: MenuState,
}

impl<S: CourseSource, R: BufRead, W: Write> AdvisorMenu<S, R, W> {
    pub fn new(loader: CourseLoader<S>, input: R, output: W) -> Self {
        Self {
            loader,
            table: CourseTable::new(),
            default_file: None,
            input,
            output,
            state: MenuState::AwaitingChoice,
        }
    }

    pub fn with_default_file(mut self, default_file: Option<String>) -> Self {
        self.default_file = default_file;
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 主迴圈：直到選 9 或輸入結束
    pub fn run(&mut self) -> Result<()> {
        self.write(WELCOME)?;
        while self.state == MenuState::AwaitingChoice {
            self.step()?;
        }
        Ok(())
    }

    /// Prints the menu, reads one choice and dispatches it.
    pub fn step(&mut self) -> Result<MenuState> {
        self.write(MENU)?;

        let choice = match self.read_line()? {
            Some(line) => MenuChoice::parse(&line),
            None => {
                tracing::debug!("End of input, leaving the menu");
                self.write("\n")?;
                MenuChoice::Exit
            }
        };
        tracing::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Load => self.load_data()?,
            MenuChoice::List => self.print_course_list()?,
            MenuChoice::Lookup => self.print_course()?,
            MenuChoice::Exit => {
                self.write(FAREWELL)?;
                self.state = MenuState::Exiting;
            }
            MenuChoice::Unknown(value) => {
                self.write(&format!("{} isn't on the menu. Try again.\n\n", value))?;
            }
            MenuChoice::NotANumber(input) => {
                tracing::debug!("Discarded non-numeric input: {:?}", input);
                self.write(NOT_A_NUMBER)?;
            }
        }

        Ok(self.state)
    }

    fn load_data(&mut self) -> Result<()> {
        self.write(FILE_PROMPT)?;
        let answer = self.read_line()?.unwrap_or_default();
        let answer = answer.trim();

        let name = match (answer.is_empty(), &self.default_file) {
            (true, Some(default_file)) => default_file.clone(),
            _ => answer.to_string(),
        };

        if let Err(e) = validate_path("file name", &name) {
            return self.report(&e);
        }

        match self.loader.reload(&mut self.table, &name) {
            Ok(report) => self.write(&render::load_summary(&report)),
            Err(e) => self.report(&e),
        }
    }

    fn print_course_list(&mut self) -> Result<()> {
        let listing = list_courses(&self.table).map(|courses| render::course_list(&courses));
        match listing {
            Ok(text) => self.write(&text),
            Err(e) => self.report(&e),
        }
    }

    fn print_course(&mut self) -> Result<()> {
        if self.table.is_empty() {
            return self.report(&CatalogError::NotLoaded);
        }

        self.write(COURSE_PROMPT)?;
        let Some(query) = self.read_token()? else {
            return Ok(());
        };

        let detail = find_course(&self.table, &query).map(render::course_detail);
        match detail {
            Ok(text) => self.write(&text),
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, error: &CatalogError) -> Result<()> {
        tracing::warn!("❌ {}", error);
        tracing::debug!("💡 Suggestion: {}", error.recovery_suggestion());
        self.write(&format!("{}\n\n", error.user_friendly_message()))
    }

    /// 讀一整行；`None` 代表輸入結束。非 UTF-8 的位元組以替代字元處理
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// 跳過空行，取下一個非空白 token
    fn read_token(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.read_line()? {
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
