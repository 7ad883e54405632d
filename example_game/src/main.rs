//! Example Game - A minimal TUI demonstrating vitals_core
//!
//! This demo shows:
//! - A player entity wired to a VitalsComponent with subscribed UI events
//! - Incoming damage resolving through shield before health
//! - Granting/revoking abilities through the ledger
//! - An externally driven shield regeneration tick (the core declares the
//!   regen rate/delay but deliberately runs no regen loop itself)

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use vitals_core::prelude::*;

const TICK_SECONDS: f64 = 0.1;

const LOADOUT_TOML: &str = r#"
[vitals]
health = 40.0
max_health = 60.0
shield_regen = 4.0
shield_regen_delay = 1.5

[[abilities]]
id = "dash"
input = "movement_ability"

[[abilities]]
id = "rifle"
input = "weapon_fire"

[[effects]]
id = "starting_shield"
modifiers = [
    { attribute = "max_shield", op = "override", magnitude = 50.0 },
    { attribute = "shield", op = "override", magnitude = 30.0 },
]
"#;

/// In-process stand-in for the host ability machinery
///
/// Owns the player's vitals component; grants are recorded so the revoke
/// path has something real to tear down.
struct LocalAbilityHost {
    component: VitalsComponent,
    next_handle: u64,
    active: Vec<(GrantHandle, AbilityDescriptor)>,
}

impl LocalAbilityHost {
    fn new(component: VitalsComponent) -> Self {
        LocalAbilityHost {
            component,
            next_handle: 0,
            active: Vec::new(),
        }
    }
}

impl AbilityHost for LocalAbilityHost {
    fn grant(&mut self, descriptor: &AbilityDescriptor) -> GrantHandle {
        self.next_handle += 1;
        let handle = GrantHandle(self.next_handle);
        self.active.push((handle, descriptor.clone()));
        handle
    }

    fn revoke(&mut self, handle: GrantHandle) {
        self.active.retain(|(h, _)| *h != handle);
    }

    fn apply_effect_to_self(&mut self, spec: EffectSpec) {
        self.component.execute_effect(&spec);
    }
}

/// Main game state
struct GameState {
    loadout: LoadoutConfig,
    host: LocalAbilityHost,
    ledger: AbilityLedger,
    messages: Rc<RefCell<Vec<String>>>,

    time: f64,
    last_damage_time: f64,
    rng: ChaCha8Rng,
}

impl GameState {
    fn new() -> Self {
        let loadout = parse_loadout(LOADOUT_TOML).expect("embedded loadout must parse");
        let messages = Rc::new(RefCell::new(vec!["You are being shot at.".to_string()]));

        let mut state = GameState {
            host: LocalAbilityHost::new(spawn_player(&loadout, &messages)),
            ledger: AbilityLedger::new(),
            loadout,
            messages,
            time: 0.0,
            last_damage_time: 0.0,
            rng: ChaCha8Rng::seed_from_u64(7),
        };
        state.possess();
        state
    }

    /// Possession-time setup: grant the loadout and apply startup effects
    fn possess(&mut self) {
        let role = self.host.component.role();
        self.ledger
            .grant_all(&mut self.host, role, &self.loadout.abilities);
        self.ledger
            .apply_initial_effects(&mut self.host, "player_1", &self.loadout.effects);
    }

    fn push_message(&self, text: impl Into<String>) {
        self.messages.borrow_mut().push(text.into());
    }

    /// An enemy volley lands on the player
    fn enemy_attack(&mut self) {
        let amount = self.rng.gen_range(5.0..22.0);
        if let Some(outcome) = self.host.component.take_damage(amount, "turret") {
            if outcome.damage > 0.0 {
                self.last_damage_time = self.time;
                self.push_message(format!("Hit for {:.0}: {}", outcome.damage, outcome.summary()));
                if outcome.is_killing_blow {
                    self.push_message("You died. Press r to respawn.".to_string());
                }
            }
        }
    }

    /// A healing effect, bypassing damage resolution entirely
    fn drink_potion(&mut self) {
        let heal = EffectSpec::outgoing(
            &EffectDescriptor::new(
                "potion",
                vec![Modifier::new(Attribute::Health, ModOp::Add, 15.0)],
            ),
            "player_1",
        )
        .expect("potion descriptor is valid");
        self.host.component.execute_effect(&heal);
    }

    fn revoke_abilities(&mut self) {
        let role = self.host.component.role();
        self.ledger.revoke_all(&mut self.host, role);
        self.push_message("Abilities revoked.");
    }

    fn regrant_abilities(&mut self) {
        if !self.ledger.is_empty() {
            return;
        }
        let role = self.host.component.role();
        self.ledger
            .grant_all(&mut self.host, role, &self.loadout.abilities);
        self.push_message("Abilities granted.");
    }

    fn respawn(&mut self) {
        self.revoke_abilities();
        self.host.component = spawn_player(&self.loadout, &self.messages);
        self.possess();
        self.push_message("Respawned.");
    }

    /// Fixed-rate tick driving the external shield regeneration process
    fn tick(&mut self) {
        self.time += TICK_SECONDS;

        let component = &mut self.host.component;
        if component.set().is_dead() {
            return;
        }
        let delay = component.value(Attribute::ShieldRegenDelay);
        if self.time - self.last_damage_time < delay {
            return;
        }
        let regen = component.value(Attribute::ShieldRegen) * TICK_SECONDS;
        if regen > 0.0 && component.set().missing_shield() > 0.0 {
            let current = component.value(Attribute::Shield);
            component.apply_current_change(Attribute::Shield, current + regen);
        }
    }
}

/// Build the player's component and subscribe the message log to its vitals
fn spawn_player(loadout: &LoadoutConfig, messages: &Rc<RefCell<Vec<String>>>) -> VitalsComponent {
    let mut component =
        VitalsComponent::from_set(loadout.vitals.to_set(), NetRole::Authoritative);

    let sink = Rc::clone(messages);
    component.subscribe(Attribute::Health, move |old, new| {
        if new < old {
            sink.borrow_mut().push(format!("Health {:.0} -> {:.0}", old, new));
        }
    });
    let sink = Rc::clone(messages);
    component.subscribe(Attribute::Shield, move |old, new| {
        if new < old {
            sink.borrow_mut().push(format!("Shield {:.0} -> {:.0}", old, new));
        }
    });

    component
}

fn draw(f: &mut Frame, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let component = &state.host.component;
    let health = component.value(Attribute::Health);
    let max_health = component.value(Attribute::MaxHealth).max(1.0);
    let shield = component.value(Attribute::Shield);
    let max_shield = component.value(Attribute::MaxShield).max(1.0);

    let health_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Health"))
        .gauge_style(Style::default().fg(Color::Red))
        .ratio((health / max_health).clamp(0.0, 1.0))
        .label(format!("{:.0} / {:.0}", health, max_health));
    f.render_widget(health_gauge, chunks[0]);

    let shield_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Shield"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((shield / max_shield).clamp(0.0, 1.0))
        .label(format!("{:.0} / {:.0}", shield, max_shield));
    f.render_widget(shield_gauge, chunks[1]);

    let abilities: Vec<ListItem> = state
        .host
        .active
        .iter()
        .map(|(handle, d)| ListItem::new(format!("#{} {} ({:?})", handle.0, d.id, d.input)))
        .collect();
    let abilities = List::new(abilities)
        .block(Block::default().borders(Borders::ALL).title("Granted abilities"));
    f.render_widget(abilities, chunks[2]);

    let messages = state.messages.borrow();
    let visible = messages
        .iter()
        .rev()
        .take(chunks[3].height.saturating_sub(2) as usize)
        .rev()
        .map(|m| Line::from(m.as_str()))
        .collect::<Vec<_>>();
    let log = Paragraph::new(visible)
        .block(Block::default().borders(Borders::ALL).title("Log"));
    f.render_widget(log, chunks[3]);

    let help = Paragraph::new("space: take fire  h: potion  x: revoke  g: grant  r: respawn  q: quit")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}

fn main() -> io::Result<()> {
    let mut state = GameState::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| draw(f, &state))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') => state.enemy_attack(),
                    KeyCode::Char('h') => state.drink_potion(),
                    KeyCode::Char('x') => state.revoke_abilities(),
                    KeyCode::Char('g') => state.regrant_abilities(),
                    KeyCode::Char('r') => state.respawn(),
                    _ => {}
                }
            }
        }
        state.tick();
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
