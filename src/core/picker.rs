//! Interactive selection from a ranked list.
//!
//! [`Picker`] is the seam between the ranking pipeline and the terminal: it
//! receives pre-rendered labels and returns the position the user chose.
//! Position 0 is always the "back" entry, prepended by [`with_back`].
//!
//! [`SearchPicker`] is the terminal implementation. It runs on key presses:
//! arrows move the highlight, typing filters the list with fuzzy matching
//! (or jumps to a row when the text is a number), Enter chooses and Esc goes
//! back. Key presses come from a [`KeySource`]: the raw-mode terminal when
//! attached to one, otherwise stdin replayed line by line.

use crate::core::{
    colors::strip_ansi_codes,
    error::{GitReposError, Result},
};
use colored::*;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, DisableLineWrap,
        EnableLineWrap,
    },
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Reverse;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

pub const BACK_LABEL: &str = "← Back";
pub const PAGE_SIZE: usize = 30;

// Title, blank lines, scroll hints, notice, key help and search line
const CHROME_LINES: usize = 9;
const MIN_PAGE_SIZE: usize = 3;

/// A picker row: the synthetic back entry or a real value
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T> {
    Back,
    Item(T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub entry: Entry<T>,
    pub label: String,
}

/// Prepend the back entry to already ranked `(value, label)` pairs
pub fn with_back<T>(items: impl IntoIterator<Item = (T, String)>) -> Vec<Choice<T>> {
    std::iter::once(Choice {
        entry: Entry::Back,
        label: BACK_LABEL.dimmed().to_string(),
    })
    .chain(items.into_iter().map(|(value, label)| Choice {
        entry: Entry::Item(value),
        label,
    }))
    .collect()
}

pub trait Picker {
    /// Show `labels` under `title` and return the chosen position
    fn pick(&mut self, title: &str, labels: &[String]) -> Result<usize>;
}

/// Run `picker` over `choices`; `None` means the user went back
pub fn select<T: Clone>(
    picker: &mut dyn Picker,
    title: &str,
    choices: &[Choice<T>],
) -> Result<Option<T>> {
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let position = picker.pick(title, &labels)?;

    Ok(match choices.get(position).map(|c| &c.entry) {
        Some(Entry::Item(value)) => Some(value.clone()),
        Some(Entry::Back) | None => None,
    })
}

/// Where key presses come from
pub trait KeySource {
    /// Next key press, or `None` once input is exhausted
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;

    /// Whether keys come from a terminal that should be switched to raw mode
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<K: KeySource + ?Sized> KeySource for Box<K> {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        (**self).next_key()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

/// Key presses read from the terminal with crossterm
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

/// Replays line-oriented input as key presses: every character of a line is
/// typed, then Enter is pressed.
pub struct LineKeys<R> {
    input: R,
    pending: VecDeque<KeyEvent>,
}

impl<R: BufRead> LineKeys<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> KeySource for LineKeys<R> {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        if self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.trim_end_matches(['\r', '\n'])
                    .chars()
                    .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
            self.pending.push_back(KeyEvent::from(KeyCode::Enter));
        }
        Ok(self.pending.pop_front())
    }
}

/// Raw mode for the lifetime of one pick; restored on drop, including on error
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), DisableLineWrap, Hide)?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), EnableLineWrap, Show);
    }
}

/// What a key press did to the search
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Changed,
    Chosen(usize),
    Back,
    Rejected(String),
}

/// Query, filtered rows and highlight of one pick
struct Search {
    plain: Vec<String>,
    matcher: SkimMatcherV2,
    query: String,
    visible: Vec<usize>,
    cursor: usize,
    top: usize,
    page: usize,
}

impl Search {
    fn new(labels: &[String], page: usize) -> Self {
        Self {
            plain: labels.iter().map(|l| strip_ansi_codes(l)).collect(),
            matcher: SkimMatcherV2::default().ignore_case(),
            query: String::new(),
            visible: (0..labels.len()).collect(),
            cursor: 0,
            top: 0,
            page: page.max(1),
        }
    }

    fn handle(&mut self, key: KeyEvent) -> Step {
        match key.code {
            KeyCode::Esc => return Step::Back,
            KeyCode::Enter => return self.confirm(),
            KeyCode::Up => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Down => self.move_to(self.cursor + 1),
            KeyCode::PageUp => self.move_to(self.cursor.saturating_sub(self.page)),
            KeyCode::PageDown => self.move_to(self.cursor + self.page),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.visible.len()),
            KeyCode::Backspace => {
                self.query.pop();
                self.refilter();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.push(c);
                self.refilter();
            }
            _ => {}
        }
        Step::Changed
    }

    fn confirm(&mut self) -> Step {
        let query = self.query.trim().to_string();

        if let Ok(position) = query.parse::<usize>() {
            if position >= self.plain.len() {
                self.clear_query();
                return Step::Rejected(format!(
                    "Index {position} is out of range (0-{} available)",
                    self.plain.len() - 1
                ));
            }
        } else if !query.is_empty() && self.visible.len() == 1 {
            self.clear_query();
            return Step::Rejected(format!("No matches for '{query}'"));
        }

        Step::Chosen(self.visible[self.cursor])
    }

    fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
    }

    /// Recompute visible rows after the query changed. The back row always stays first.
    fn refilter(&mut self) {
        let query = self.query.trim().to_string();
        let len = self.plain.len();

        let cursor = if query.is_empty() {
            self.visible = (0..len).collect();
            0
        } else if let Ok(position) = query.parse::<usize>() {
            self.visible = (0..len).collect();
            if position < len {
                position
            } else {
                0
            }
        } else {
            let mut scored: Vec<(usize, i64)> = (1..len)
                .filter_map(|i| {
                    self.matcher
                        .fuzzy_match(&self.plain[i], &query)
                        .map(|score| (i, score))
                })
                .collect();
            // Stable, so equal scores keep their ranked order
            scored.sort_by_key(|&(_, score)| Reverse(score));
            log::debug!("Search '{query}' matched {} entries", scored.len());

            self.visible = std::iter::once(0)
                .chain(scored.into_iter().map(|(i, _)| i))
                .collect();
            usize::from(self.visible.len() > 1)
        };

        self.top = 0;
        self.move_to(cursor);
    }

    fn move_to(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.visible.len().saturating_sub(1));
        if self.cursor < self.top {
            self.top = self.cursor;
        } else if self.cursor >= self.top + self.page {
            self.top = self.cursor + 1 - self.page;
        }
    }

    fn window(&self) -> &[usize] {
        let end = (self.top + self.page).min(self.visible.len());
        &self.visible[self.top..end]
    }
}

/// Key-driven picker with fuzzy search over any key source and writer
pub struct SearchPicker<K, W> {
    keys: K,
    output: W,
}

impl SearchPicker<Box<dyn KeySource>, io::Stdout> {
    /// Raw-mode terminal keys when attached to a terminal, stdin lines otherwise
    pub fn stdio() -> Self {
        let keys: Box<dyn KeySource> = if io::stdin().is_terminal() && io::stdout().is_terminal()
        {
            Box::new(TerminalKeys)
        } else {
            Box::new(LineKeys::new(io::stdin().lock()))
        };
        Self::new(keys, io::stdout())
    }
}

impl<K: KeySource, W: Write> SearchPicker<K, W> {
    pub fn new(keys: K, output: W) -> Self {
        Self { keys, output }
    }

    fn render(
        &mut self,
        title: &str,
        labels: &[String],
        search: &Search,
        notice: Option<&str>,
        interactive: bool,
    ) -> Result<()> {
        let eol = if interactive { "\r\n" } else { "\n" };
        if interactive {
            queue!(self.output, MoveTo(0, 0), Clear(ClearType::All))?;
        }

        write!(self.output, "{eol}{}{eol}{eol}", title.white())?;

        if search.top > 0 {
            write!(
                self.output,
                "{}{eol}",
                format!("  ({} more above)", search.top).dimmed()
            )?;
        }

        for (offset, &position) in search.window().iter().enumerate() {
            let pointer = if search.top + offset == search.cursor {
                "❯".cyan().bold()
            } else {
                " ".normal()
            };
            write!(
                self.output,
                "{pointer} {} {}{eol}",
                format!("[{position}]").bright_black(),
                labels[position]
            )?;
        }

        let below = search.visible.len() - search.top - search.window().len();
        if below > 0 {
            write!(
                self.output,
                "{}{eol}",
                format!("  ({below} more, type to filter)").dimmed()
            )?;
        }

        if let Some(notice) = notice {
            write!(self.output, "{eol}{} {notice}{eol}", "✕".red())?;
        }

        write!(
            self.output,
            "{eol}{}{eol}{} {}",
            "↑/↓ move, Enter select, Esc back, type to search or a number to jump".dimmed(),
            "Search:".blue(),
            search.query
        )?;
        self.output.flush()?;
        Ok(())
    }
}

impl<K: KeySource, W: Write> Picker for SearchPicker<K, W> {
    fn pick(&mut self, title: &str, labels: &[String]) -> Result<usize> {
        if labels.is_empty() {
            return Ok(0);
        }

        let interactive = self.keys.is_terminal();
        let page = if interactive {
            terminal::size()
                .map(|(_, rows)| {
                    usize::from(rows)
                        .saturating_sub(CHROME_LINES)
                        .clamp(MIN_PAGE_SIZE, PAGE_SIZE)
                })
                .unwrap_or(PAGE_SIZE)
        } else {
            PAGE_SIZE
        };

        let _raw = if interactive {
            Some(RawMode::enable()?)
        } else {
            None
        };

        let mut search = Search::new(labels, page);
        let mut notice: Option<String> = None;
        let mut redraw = true;

        loop {
            if redraw {
                self.render(title, labels, &search, notice.take().as_deref(), interactive)?;
            }

            let Some(key) = self.keys.next_key()? else {
                return Ok(0);
            };
            // Raw mode swallows SIGINT, so Ctrl+C arrives as a key press
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Err(GitReposError::Interrupted);
            }

            match search.handle(key) {
                Step::Chosen(position) => return Ok(position),
                Step::Back => return Ok(0),
                Step::Rejected(message) => {
                    notice = Some(message);
                    redraw = true;
                }
                Step::Changed => redraw = interactive,
            }
        }
    }
}

/// Picker fed from a string, one line per answer
#[cfg(test)]
pub(crate) fn scripted_picker(
    script: &str,
) -> SearchPicker<LineKeys<io::Cursor<String>>, Vec<u8>> {
    SearchPicker::new(LineKeys::new(io::Cursor::new(script.to_string())), Vec::new())
}
