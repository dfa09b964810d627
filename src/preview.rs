use crate::carousel::Carousel;
use crate::config::Config;
use crate::contact::{ContactForm, Field, SubmitState};
use crate::content::{self, Section, BENEFITS, SERVICE_OPTIONS, STATS};
use crate::hero::{HeroOptions, Visualization};
use crate::i18n::I18n;
use anyhow::{Context, Result};
use colored::*;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::{Frame, Terminal};
use std::io::{self, Write};
use std::sync::Once;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Raw mode, alternate screen and mouse capture, undone on drop.
struct TerminalGuard {
    alt_screen: bool,
    mouse: bool,
}

impl TerminalGuard {
    fn enter(alt_screen: bool, mouse: bool) -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        // Built before the remaining steps so a failure below still restores.
        let guard = Self { alt_screen, mouse };
        let mut stdout = io::stdout();
        if alt_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        execute!(stdout, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        if self.alt_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = execute!(stdout, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

fn install_ctrlc_handler() {
    static INIT_CTRL_C: Once = Once::new();
    INIT_CTRL_C.call_once(|| {
        let _ = ctrlc::set_handler(move || {
            // Best-effort restore: mouse off, cursor on, main screen, then exit 130
            let _ = terminal::disable_raw_mode();
            print!("\x1b[?1000l\x1b[?1002l\x1b[?1003l\x1b[?1006l\x1b[?25h\x1b[?1049l");
            let _ = io::stdout().flush();
            std::process::exit(130);
        });
    });
}

/// Run the interactive preview until the user quits.
pub fn run(i18n: I18n, config: &Config) -> Result<()> {
    install_ctrlc_handler();

    let guard = match TerminalGuard::enter(config.preview.alt_screen, config.preview.mouse) {
        Ok(guard) => guard,
        Err(err) => {
            tracing::warn!("terminal setup failed: {err:#}");
            println!("{}", i18n.t("cli.preview_unavailable").yellow());
            return Ok(());
        }
    };

    let size = terminal::size().unwrap_or((80, 24));
    let mut app = App::new(i18n, config, size);
    let mut term = Terminal::new(CrosstermBackend::new(io::stdout())).context("opening terminal")?;
    term.clear()?;

    let frame_time = config.frame_time();
    let mut last = Instant::now();
    while !app.should_quit() {
        term.draw(|f| app.draw(f))?;

        if event::poll(frame_time)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last), now);
        last = now;
    }
    tracing::debug!(section = ?app.section(), locale = %app.i18n().locale(), "preview closed");

    drop(term);
    drop(guard);
    Ok(())
}

/// Preview state: the active section, the two carousels, the contact form
/// and the hero scene.
pub struct App {
    i18n: I18n,
    section: Section,
    portfolio: Carousel,
    testimonials: Carousel,
    form: ContactForm,
    focus: Field,
    hero: Option<Visualization>,
    hero_options: HeroOptions,
    hero_area: Rect,
    notice: Option<String>,
    quit: bool,
}

impl App {
    pub fn new(i18n: I18n, config: &Config, (cols, rows): (u16, u16)) -> Self {
        let hero_options = config.hero_options();
        Self {
            i18n,
            section: Section::Home,
            portfolio: Carousel::manual(content::case_studies().len()),
            testimonials: Carousel::new(content::testimonials().len(), config.carousel_interval()),
            form: ContactForm::new(config.submit_delay(), config.reset_delay()),
            focus: Field::Name,
            hero: mount_hero(cols, rows, &hero_options),
            hero_options,
            hero_area: Rect::default(),
            notice: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn section(&self) -> Section {
        self.section
    }

    fn section_index(&self) -> usize {
        Section::ALL.iter().position(|s| *s == self.section).unwrap_or(0)
    }

    fn select_offset(&mut self, offset: isize) {
        let len = Section::ALL.len() as isize;
        let i = (self.section_index() as isize + offset).rem_euclid(len);
        self.section = Section::ALL[i as usize];
    }

    fn toggle_language(&mut self) {
        let locale = self.i18n.toggle();
        // Notices are stored translated; drop the stale one.
        self.notice = None;
        tracing::debug!(%locale, "preview language toggled");
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('l') if ctrl => self.toggle_language(),
            KeyCode::Esc => self.quit = true,
            KeyCode::PageDown => self.select_offset(1),
            KeyCode::PageUp => self.select_offset(-1),
            KeyCode::F(n @ 1..=5) => self.section = Section::ALL[usize::from(n) - 1],
            _ if self.section == Section::Contact => self.handle_form_key(key, now),
            _ => self.handle_nav_key(key),
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char(c @ '1'..='5') => self.section = Section::ALL[c as usize - '1' as usize],
            KeyCode::Tab => self.select_offset(1),
            KeyCode::BackTab => self.select_offset(-1),
            KeyCode::Left => match self.section {
                Section::Portfolio => self.portfolio.prev(),
                Section::Testimonials => self.testimonials.prev(),
                _ => {}
            },
            KeyCode::Right => match self.section {
                Section::Portfolio => self.portfolio.next(),
                Section::Testimonials => self.testimonials.next(),
                _ => {}
            },
            KeyCode::Home | KeyCode::End => {
                let carousel = match self.section {
                    Section::Portfolio => &mut self.portfolio,
                    Section::Testimonials => &mut self.testimonials,
                    _ => return,
                };
                let target = if key.code == KeyCode::Home { 0 } else { carousel.len().saturating_sub(1) };
                carousel.go_to(target);
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let on_service = self.focus == Field::Service;
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            // The service is a choice, not free text.
            KeyCode::Right | KeyCode::Char(' ') if on_service => self.cycle_service(1),
            KeyCode::Left if on_service => self.cycle_service(-1),
            KeyCode::Backspace if on_service => self.form.set(Field::Service, ""),
            KeyCode::Char(_) if on_service => {}
            KeyCode::Backspace => self.form.pop_char(self.focus),
            KeyCode::Char(c) => self.form.push_char(self.focus, c),
            KeyCode::Enter => match self.form.submit(now) {
                Ok(_) => self.notice = None,
                Err(err) => {
                    tracing::debug!("contact form rejected: {err}");
                    self.notice = Some(self.i18n.t(err.message_key()));
                }
            },
            _ => {}
        }
    }

    /// Step through "no choice" followed by each service option, wrapping.
    fn cycle_service(&mut self, step: isize) {
        let current = self.form.details().get(Field::Service);
        let position = SERVICE_OPTIONS.iter().position(|&id| id == current).map_or(0, |i| i + 1);
        let count = SERVICE_OPTIONS.len() as isize + 1;
        let next = (position as isize + step).rem_euclid(count) as usize;
        let value = if next == 0 { "" } else { SERVICE_OPTIONS[next - 1] };
        self.form.set(Field::Service, value);
    }

    /// Drag on the hero canvas rotates the graph.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.section != Section::Home {
            return;
        }
        let area = self.hero_area;
        let Some(vis) = self.hero.as_mut() else {
            return;
        };
        let inside = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        // Cells are about twice as tall as wide.
        let px = f64::from(mouse.column.saturating_sub(area.x));
        let py = f64::from(mouse.row.saturating_sub(area.y)) * 2.0;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => vis.press(px, py),
            MouseEventKind::Drag(MouseButton::Left) => vis.drag(px, py),
            MouseEventKind::Up(MouseButton::Left) => vis.release(),
            _ => {}
        }
    }

    pub fn tick(&mut self, dt: Duration, now: Instant) {
        self.testimonials.tick(dt);
        if self.form.poll(now) != SubmitState::Idle {
            self.notice = None;
        }
        if let Some(vis) = self.hero.as_mut() {
            vis.tick(dt);
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .split(f.size());

        let titles: Vec<String> = Section::ALL
            .into_iter()
            .enumerate()
            .map(|(i, s)| format!("{} {}", i + 1, s.label(&self.i18n)))
            .collect();
        let header = format!(" {} · {} ", content::BRAND, self.i18n.locale().native_name());
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title(header))
            .select(self.section_index())
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[0]);

        match self.section {
            Section::Home => self.draw_home(f, chunks[1]),
            Section::Services => self.draw_services(f, chunks[1]),
            Section::Portfolio => self.draw_portfolio(f, chunks[1]),
            Section::Testimonials => self.draw_testimonials(f, chunks[1]),
            Section::Contact => self.draw_contact(f, chunks[1]),
        }

        let hint = Paragraph::new(self.i18n.t("cli.preview_hint")).style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[2]);
    }

    fn draw_home(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);

        let mut lines: Vec<Line> = self
            .i18n
            .t("hero.title")
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().add_modifier(Modifier::BOLD))))
            .collect();
        lines.push(Line::from(self.i18n.t("hero.subtitle")));
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

        let block = Block::default().borders(Borders::ALL).title(format!(" {} ", self.i18n.t("hero.cta")));
        let inner = block.inner(chunks[1]);
        self.hero_area = inner;

        if self.hero.as_ref().map_or(true, Visualization::is_disposed) {
            self.hero = mount_hero(inner.width, inner.height, &self.hero_options);
        }
        let Some(vis) = self.hero.as_mut() else {
            f.render_widget(block, chunks[1]);
            return;
        };
        vis.resize(f64::from(inner.width), f64::from(inner.height) * 2.0);
        let Some(scene) = vis.scene() else {
            f.render_widget(block, chunks[1]);
            return;
        };

        let aspect = vis.aspect();
        let particles: Vec<(f64, f64)> = scene
            .particle_positions()
            .into_iter()
            .filter_map(|p| scene.project(p, aspect))
            .map(|p| (p.x, p.y))
            .collect();
        let segments: Vec<(f64, f64, f64, f64, Color)> = scene
            .edge_segments()
            .into_iter()
            .filter_map(|(a, b, opacity)| {
                let a = scene.project(a, aspect)?;
                let b = scene.project(b, aspect)?;
                Some((a.x, a.y, b.x, b.y, glow(opacity)))
            })
            .collect();
        let mut main_nodes = Vec::new();
        let mut other_nodes = Vec::new();
        for (node, p) in scene.nodes().iter().zip(scene.node_positions()) {
            if let Some(p) = scene.project(p, aspect) {
                if node.main {
                    main_nodes.push((p.x, p.y));
                } else {
                    other_nodes.push((p.x, p.y));
                }
            }
        }

        // Nodes brighten while the graph is being dragged.
        let main_color = if scene.is_pressed() { Color::White } else { Color::Cyan };
        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(move |ctx| {
                ctx.draw(&Points { coords: &particles, color: Color::DarkGray });
                for &(x1, y1, x2, y2, color) in &segments {
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
                }
                ctx.layer();
                ctx.draw(&Points { coords: &other_nodes, color: Color::LightBlue });
                ctx.draw(&Points { coords: &main_nodes, color: main_color });
            });
        f.render_widget(canvas, chunks[1]);
    }

    fn draw_services(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(self.i18n.t("services.subtitle")), Line::from("")];
        for service in content::services() {
            lines.push(Line::from(Span::styled(
                self.i18n.t(&service.title_key()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("  {}", self.i18n.t(&service.description_key()))));
        }
        let block = Block::default().borders(Borders::ALL).title(format!(" {} ", self.i18n.t("services.title")));
        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }

    fn draw_portfolio(&self, f: &mut Frame, area: Rect) {
        if self.portfolio.is_empty() {
            return;
        }
        let studies = content::case_studies();
        let Some(study) = studies.get(self.portfolio.index()) else {
            return;
        };
        let mut lines = vec![
            Line::from(format!(
                "{}/{}  {}",
                self.portfolio.index() + 1,
                self.portfolio.len(),
                self.i18n.t(study.industry_key)
            )),
            Line::from(""),
            Line::from(Span::styled(self.i18n.t(&study.key("title")), Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(self.i18n.t(&study.key("category")), Style::default().fg(Color::Cyan))),
            Line::from(self.i18n.t(&study.key("description"))),
            Line::from(""),
        ];
        for key in study.result_keys() {
            lines.push(Line::from(Span::styled(format!("• {}", self.i18n.t(&key)), Style::default().fg(Color::Green))));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(self.i18n.t("portfolio.scroll_hint"), Style::default().fg(Color::DarkGray))));

        let block = Block::default().borders(Borders::ALL).title(format!(" {} ", self.i18n.t("portfolio.title")));
        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
    }

    fn draw_testimonials(&self, f: &mut Frame, area: Rect) {
        let testimonials = content::testimonials();
        let Some(item) = testimonials.get(self.testimonials.index()) else {
            return;
        };
        let mut position = format!(
            "{}/{}",
            self.testimonials.index() + 1,
            self.testimonials.len()
        );
        if self.testimonials.is_autoplaying() {
            position.push_str(&format!("  ▶ {}", self.i18n.t("cli.preview_autoplay")));
        }
        let stats = STATS
            .iter()
            .map(|s| format!("{} {}", s.value, self.i18n.t(s.label_key)))
            .collect::<Vec<_>>()
            .join("  ·  ");

        let lines = vec![
            Line::from(position),
            Line::from(""),
            Line::from(Span::styled(item.stars(), Style::default().fg(Color::Yellow))),
            Line::from(Span::styled(
                format!("“{}”", self.i18n.t(&item.key("content"))),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(vec![
                Span::styled(self.i18n.t(&item.key("name")), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(
                    ", {} · {}",
                    self.i18n.t(&item.key("position")),
                    self.i18n.t(&item.key("company"))
                )),
            ]),
            Line::from(Span::styled(self.i18n.t(&item.key("results")), Style::default().fg(Color::Green))),
            Line::from(""),
            Line::from(Span::styled(stats, Style::default().fg(Color::Cyan))),
        ];
        let block = Block::default().borders(Borders::ALL).title(format!(" {} ", self.i18n.t("testimonials.title")));
        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
    }

    fn draw_contact(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let labels: Vec<String> = Field::ALL.iter().map(|field| self.i18n.t(&field.label_key())).collect();
        let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

        let mut lines = vec![Line::from(self.i18n.t("cta.form.contact_description")), Line::from("")];
        for (field, label) in Field::ALL.into_iter().zip(&labels) {
            let focused = field == self.focus;
            let marker = if focused { "› " } else { "  " };
            let padding = " ".repeat(label_width - label.width());
            let value = self.form.details().get(field);
            let value_span = if value.is_empty() {
                Span::styled(self.i18n.t(&field.placeholder_key()), Style::default().fg(Color::DarkGray))
            } else if field == Field::Service && SERVICE_OPTIONS.contains(&value) {
                Span::raw(format!("◀ {} ▶", self.i18n.t(&content::service_option_key(value))))
            } else {
                Span::raw(value.to_string())
            };
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{}{} ", marker, label, padding), label_style),
                value_span,
            ]));
        }
        lines.push(Line::from(""));

        match self.form.state() {
            SubmitState::Idle => lines.push(Line::from(Span::styled(
                format!("[ {} ]", self.i18n.t("cta.form.get_consultation")),
                Style::default().fg(Color::Cyan),
            ))),
            SubmitState::Submitting { .. } => lines.push(Line::from(Span::styled(
                self.i18n.t("cta.form.submitting_text"),
                Style::default().fg(Color::Yellow),
            ))),
            SubmitState::Submitted { .. } => {
                lines.push(Line::from(Span::styled(
                    self.i18n.t("cta.form.success_title"),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(self.i18n.t("cta.form.success_message")));
                if let Some(at) = self.form.last_submitted() {
                    lines.push(Line::from(format!(
                        "{} {}",
                        self.i18n.t("cli.form_submitted_at"),
                        at.format("%H:%M:%S")
                    )));
                }
            }
        }
        if let Some(notice) = &self.notice {
            lines.push(Line::from(Span::styled(notice.clone(), Style::default().fg(Color::Red))));
        }

        let block = Block::default().borders(Borders::ALL).title(format!(" {} ", self.i18n.t("cta.form.contact_now")));
        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), chunks[0]);

        let mut aside = vec![Line::from(self.i18n.t("cta.why_choose.subtitle")), Line::from("")];
        for id in BENEFITS {
            aside.push(Line::from(Span::styled(
                self.i18n.t(&format!("cta.benefits.{}.title", id)),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            aside.push(Line::from(self.i18n.t(&format!("cta.benefits.{}.description", id))));
        }
        aside.push(Line::from(""));
        aside.push(Line::from(Span::styled(self.i18n.t("cta.contact.title"), Style::default().fg(Color::Cyan))));
        aside.push(Line::from(content::PHONE));
        aside.push(Line::from(content::EMAIL));
        let block = Block::default().borders(Borders::ALL).title(format!(" {} ", self.i18n.t("cta.why_choose.title")));
        f.render_widget(Paragraph::new(aside).block(block).wrap(Wrap { trim: true }), chunks[1]);
    }
}

fn mount_hero(cols: u16, rows: u16, options: &HeroOptions) -> Option<Visualization> {
    Visualization::mount(f64::from(cols), f64::from(rows) * 2.0, options)
}

fn glow(opacity: f64) -> Color {
    let channel = |c: f64| (c * opacity).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(56.0), channel(189.0), channel(248.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use ratatui::backend::TestBackend;

    fn app(lang: &str) -> App {
        let mut config = Config::default();
        config.contact.submit_delay_ms = 100;
        config.contact.reset_delay_ms = 100;
        config.hero.particles = 10;
        App::new(I18n::new(lang), &config, (80, 24))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn language_toggle_and_quit() {
        let mut app = app("vi");
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.i18n().locale(), Locale::En);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.i18n().locale(), Locale::Vi);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn sections_switch_by_number_and_tab() {
        let mut app = app("vi");
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.section(), Section::Portfolio);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.section(), Section::Testimonials);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.section(), Section::Contact);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.section(), Section::Home);
    }

    #[test]
    fn arrows_drive_the_carousels() {
        let mut app = app("en");
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.portfolio.index(), 5);

        press(&mut app, KeyCode::Char('4'));
        assert!(app.testimonials.is_autoplaying());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.testimonials.index(), 1);
        assert!(!app.testimonials.is_autoplaying());
        press(&mut app, KeyCode::End);
        assert_eq!(app.testimonials.index(), 5);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.testimonials.index(), 0);
    }

    #[test]
    fn contact_tab_types_into_fields() {
        let mut app = app("en");
        press(&mut app, KeyCode::Char('5'));
        type_text(&mut app, "lq");
        assert_eq!(app.form.details().name, "lq");
        assert_eq!(app.i18n().locale(), Locale::En);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.details().name, "l");

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "a@b.co");
        assert_eq!(app.form.details().email, "a@b.co");

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL), Instant::now());
        assert_eq!(app.i18n().locale(), Locale::Vi);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn service_field_cycles_through_options() {
        let mut app = app("vi");
        press(&mut app, KeyCode::Char('5'));
        type_text(&mut app, "An");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "an@techviet.vn");
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focus, Field::Service);

        type_text(&mut app, "xyz");
        assert_eq!(app.form.details().service, "");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.details().service, "seo");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form.details().service, "consultation");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.form.details().service, "seo");

        let backend = TestBackend::new(100, 30);
        let mut term = Terminal::new(backend).unwrap();
        term.draw(|f| app.draw(f)).unwrap();
        let screen: String = term.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains(&app.i18n().t("cta.services.seo")));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice, None);
        assert!(matches!(app.form.state(), SubmitState::Submitting { .. }));
    }

    #[test]
    fn invalid_submit_shows_localized_notice() {
        let mut app = app("en");
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.as_deref(), Some("Please enter your full name"));
        assert_eq!(app.form.state(), SubmitState::Idle);
    }

    #[test]
    fn submit_then_reset_through_ticks() {
        let mut app = app("en");
        press(&mut app, KeyCode::Char('5'));
        type_text(&mut app, "An");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "an@example.com");

        let start = Instant::now();
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), start);
        assert!(matches!(app.form.state(), SubmitState::Submitting { .. }));

        app.tick(Duration::from_millis(100), start + Duration::from_millis(100));
        assert!(matches!(app.form.state(), SubmitState::Submitted { .. }));

        app.tick(Duration::from_millis(100), start + Duration::from_millis(200));
        assert_eq!(app.form.state(), SubmitState::Idle);
        assert!(app.form.details().name.is_empty());
    }

    #[test]
    fn every_section_draws() -> Result<()> {
        let mut app = app("vi");
        let mut term = Terminal::new(TestBackend::new(100, 30))?;
        for section in Section::ALL {
            app.section = section;
            term.draw(|f| app.draw(f))?;
        }
        Ok(())
    }

    #[test]
    fn mouse_drag_rotates_the_hero() -> Result<()> {
        let mut app = app("vi");
        let mut term = Terminal::new(TestBackend::new(100, 30))?;
        term.draw(|f| app.draw(f))?;
        let area = app.hero_area;
        assert!(area.width > 0 && area.height > 0);

        let mouse = |kind, column, row| MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE };
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), area.x + area.width - 1, area.y));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), area.x + area.width - 2, area.y + 1));
        app.tick(Duration::from_millis(100), Instant::now());

        let rotation = app.hero.as_ref().and_then(|v| v.scene()).map(|s| s.rotation());
        assert!(matches!(rotation, Some((rx, ry)) if rx > 0.0 && ry > 0.0));

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), area.x, area.y));
        let pressed = app.hero.as_ref().and_then(|v| v.scene()).map(|s| s.is_pressed());
        assert_eq!(pressed, Some(false));
        Ok(())
    }
}
