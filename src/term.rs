use crate::grid::Grid;
use crate::snake::Snake;
use crate::ui::{GameOutcome, Notifier, Renderer, ScoreDisplay};
use crate::{Cell, Coords, TermInt};
use std::{io::{self, Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, KeyEventKind, read, poll};

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';
const EMPTY_CHAR: char = ' ';
// "Score: " plus ten digits
const SCORE_LINE_WIDTH: i32 = 17;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
    board: Option<Grid>,
    last_snake: Vec<Cell>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = vec![EMPTY_CHAR; width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen, current_msg: None, board: None, last_snake: vec![] })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_blocking(&self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                if ev.kind != KeyEventKind::Release {
                    return Ok(ev);
                }
            }
        }
    }

    pub fn read_key_events_queue(&self) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Terminal area a board of this grid needs: the border plus a score line.
    /// Saturates at `TermInt::MAX` for boards no terminal could show.
    pub fn required_size(grid: &Grid) -> Coords {
        let width = grid.width().saturating_add(2).max(SCORE_LINE_WIDTH);
        let height = grid.height().saturating_add(3);
        (to_term_int(width), to_term_int(height))
    }

    pub fn fits(&self, grid: &Grid) -> bool {
        Self::fits_within(grid, self.get_terminal_size())
    }

    pub fn fits_within(grid: &Grid, (width, height): Coords) -> bool {
        let need_w = (i64::from(grid.width()) + 2).max(i64::from(SCORE_LINE_WIDTH));
        let need_h = i64::from(grid.height()) + 3;
        need_w <= i64::from(width) && need_h <= i64::from(height)
    }

    /// Clears the screen and frames an empty board for `grid`.
    pub fn draw_board(&mut self, grid: &Grid) -> io::Result<()> {
        self.clear()?;
        self.current_msg = None;
        self.board = Some(*grid);
        self.last_snake.clear();

        self.draw_borders(((grid.width() + 2) as TermInt, (grid.height() + 2) as TermInt))
    }

    pub fn draw_borders(&mut self, (width, height): Coords) -> io::Result<()> {
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..height - 1 {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, y), ' ')?;
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(Message { width: msg_width, height: msg_height, top_left });
        self.flush()
    }

    pub fn hide_message(&mut self) -> io::Result<()> {
        let Some(msg) = self.current_msg.take() else { return Ok(()) };
        let top_left = msg.top_left;

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height {
            for x_diff in 0..msg.width {
                let pos = (top_left.0 + x_diff, top_left.1 + y_diff);
                if let Some(ch) = self.screen_at(pos) {
                    self.print_at_no_save(pos, ch)?;
                }
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: Coords, ch: char) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        if let Some(idx) = self.index(pos) {
            self.screen[idx] = ch;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![EMPTY_CHAR; self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at_no_save(&mut self, pos: Coords, ch: char) -> io::Result<()> {
        // Message boxes skip the screen buffer so hiding them can restore
        // whatever they covered.
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }

    fn print_str_at(&mut self, pos: Coords, text: &str) -> io::Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.print_at((pos.0 + i as TermInt, pos.1), ch)?;
        }
        Ok(())
    }

    fn index(&self, (x, y): Coords) -> Option<usize> {
        (x < self.width && y < self.height).then(|| self.width as usize * y as usize + x as usize)
    }

    fn screen_at(&self, pos: Coords) -> Option<char> {
        self.index(pos).map(|idx| self.screen[idx])
    }

    fn ensure_board(&mut self, grid: &Grid) -> io::Result<()> {
        if self.board != Some(*grid) {
            self.draw_board(grid)?;
        }
        Ok(())
    }

    /// Only prints cells whose character changed since the last frame.
    fn put_cell(&mut self, cell: Cell, ch: char) -> io::Result<()> {
        let pos = cell_to_coords(cell);
        if self.screen_at(pos) != Some(ch) {
            self.print_at(pos, ch)?;
        }
        Ok(())
    }
}

impl Renderer for TermManager {
    fn render(&mut self, snake: &Snake, food: Option<Cell>, grid: &Grid) -> io::Result<()> {
        self.ensure_board(grid)?;

        let width = grid.width() as usize;
        let mut frame = vec![EMPTY_CHAR; grid.capacity()];
        let mut set = |(x, y): Cell, ch: char| {
            if grid.contains((x, y)) {
                frame[y as usize * width + x as usize] = ch;
            }
        };

        if let Some(food) = food {
            set(food, FOOD_CHAR);
        }
        for pos in snake.body().iter().skip(1) {
            set(*pos, SNAKE_BODY_CHAR);
        }
        set(snake.head(), snake.head_char());

        for (cell, ch) in grid.cells().zip(frame) {
            self.put_cell(cell, ch)?;
        }

        self.last_snake = snake.body().iter().copied().collect();
        self.flush()
    }
}

impl ScoreDisplay for TermManager {
    fn set_score(&mut self, score: u32) -> io::Result<()> {
        let Some(grid) = self.board else { return Ok(()) };
        let line = format!("Score: {:<10}", score);
        self.print_str_at((0, (grid.height() + 2) as TermInt), &line)?;
        self.flush()
    }
}

impl Notifier for TermManager {
    fn notify_game_over(&mut self, score: u32, outcome: GameOutcome) -> io::Result<()> {
        let headline = match outcome {
            GameOutcome::Crashed => "Game over!",
            GameOutcome::BoardFilled => "You won!",
        };

        if outcome == GameOutcome::Crashed {
            for pos in std::mem::take(&mut self.last_snake) {
                self.put_cell(pos, DEAD_SNAKE_CHAR)?;
            }
        }

        self.show_message(&[
            headline,
            &*format!("Score: {}", score),
            "",
            "Press R or Enter to play again,",
            "or Q to quit."
        ])
    }
}

fn to_term_int(n: i32) -> TermInt {
    TermInt::try_from(n.max(0)).unwrap_or(TermInt::MAX)
}

fn cell_to_coords((x, y): Cell) -> Coords {
    ((x + 1) as TermInt, (y + 1) as TermInt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_needs_border_and_score_line() {
        assert_eq!(TermManager::required_size(&Grid::new(20, 20)), (22, 23));
        assert_eq!(TermManager::required_size(&Grid::new(4, 4)), (17, 7));
    }

    #[test]
    fn huge_boards_saturate_instead_of_wrapping() {
        let grid = Grid::new(65_535, 65_535);
        assert_eq!(TermManager::required_size(&grid), (TermInt::MAX, TermInt::MAX));
        assert!(!TermManager::fits_within(&grid, (TermInt::MAX, TermInt::MAX)));

        let grid = Grid::new(i32::MAX, i32::MAX);
        assert_eq!(TermManager::required_size(&grid), (TermInt::MAX, TermInt::MAX));
    }

    #[test]
    fn fit_depends_on_terminal_size() {
        let grid = Grid::new(20, 20);
        assert!(TermManager::fits_within(&grid, (80, 24)));
        assert!(TermManager::fits_within(&grid, (22, 23)));
        assert!(!TermManager::fits_within(&grid, (21, 23)));
        assert!(!TermManager::fits_within(&grid, (80, 22)));
    }
}
