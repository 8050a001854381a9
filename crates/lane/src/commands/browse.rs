//! Interactive timeline browser.
//!
//! Each line typed at the prompt is one user action on the [`Timeline`]
//! controller. The visible list is re-rendered only when the controller
//! publishes a new one.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Input;
use lane_core::celebration::{ConfettiBurst, ConfettiKind};
use lane_core::{Direction, PlaybackOutcome, PolicyAudioOutput, Timeline};
use std::path::Path;

use super::build_timeline;
use super::timeline::print_decade;
use crate::config::Config;
use crate::error::InputError;
use crate::render::{Palette, print_memory_detail, print_stats};

/// One action typed at the browse prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Show,
    Step(Direction),
    Goto(String),
    Open(String),
    Close,
    Favorite(String),
    Dark,
    Stats,
    Music,
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(Self::Show);
        };
        let arg = parts.next().map(str::to_string);

        if let Some(direction) = Direction::parse(word) {
            return Ok(Self::Step(direction));
        }

        match word {
            "ls" | "list" => Ok(Self::Show),
            "goto" | "g" => arg
                .map(Self::Goto)
                .ok_or(InputError::missing("goto", "a decade such as 2010s")),
            "open" | "o" => arg
                .map(Self::Open)
                .ok_or(InputError::missing("open", "a memory id")),
            "close" | "c" => Ok(Self::Close),
            "fav" | "f" => arg
                .map(Self::Favorite)
                .ok_or(InputError::missing("fav", "a memory id")),
            "dark" | "d" => Ok(Self::Dark),
            "stats" | "s" => Ok(Self::Stats),
            "music" | "m" => Ok(Self::Music),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(InputError::UnknownCommand(other.to_string())),
        }
    }
}

fn print_help() {
    println!("  {}", "Commands:".bold());
    println!("    next | prev        step one decade");
    println!("    goto <decade>      jump to a decade, e.g. goto 1990s");
    println!("    open <id>          show a memory");
    println!("    close              close the open memory");
    println!("    fav <id>           toggle a favorite");
    println!("    dark               toggle dark mode");
    println!("    stats              toggle the stats view");
    println!("    music              play or pause background music");
    println!("    ls                 show the current decade");
    println!("    quit");
}

/// Browser session state around the controller.
struct Session {
    timeline: Timeline,
    audio: PolicyAudioOutput,
    confetti: Option<ConfettiBurst>,
}

impl Session {
    fn celebrate(&mut self, kind: ConfettiKind) {
        let base = self.timeline.config().celebration.confetti_duration();
        let burst = ConfettiBurst::start(kind, base);
        println!("  🎉 {}", format!("{} confetti!", burst.particle_count()).magenta());
        if let Some(previous) = self.confetti.replace(burst) {
            previous.cancel();
        }
    }

    fn palette(&self) -> Palette {
        Palette::new(self.timeline.is_dark_mode())
    }

    /// Apply one command. Returns `false` when the session should end.
    fn apply(&mut self, command: BrowseCommand) -> Result<bool, InputError> {
        match command {
            BrowseCommand::Show => print_decade(&self.timeline),
            BrowseCommand::Step(direction) => {
                if !self.timeline.navigate(direction) {
                    println!("  {}", "Already at the edge of the timeline".dimmed());
                }
            }
            BrowseCommand::Goto(label) => {
                let supported = self
                    .timeline
                    .decades()
                    .iter()
                    .any(|d| d.to_string() == label);
                if !supported {
                    return Err(InputError::UnsupportedDecade(label));
                }
                self.timeline.select_decade(&label);
            }
            BrowseCommand::Open(id) => {
                if !self.timeline.open_by_id(&id) {
                    return Err(InputError::MemoryNotFound(id));
                }
                if let Some(memory) = self.timeline.selected_memory() {
                    print_memory_detail(memory, self.palette());
                }
            }
            BrowseCommand::Close => {
                if self.timeline.close_memory() {
                    println!("  {}", "Closed".dimmed());
                }
            }
            BrowseCommand::Favorite(id) => {
                if !self.timeline.toggle_favorite(&id) {
                    return Err(InputError::MemoryNotFound(id));
                }
                let now_favorite = self
                    .timeline
                    .memories()
                    .iter()
                    .any(|m| m.id == id && m.is_favorite);
                if now_favorite {
                    println!("  {} Added to favorites", "♥".red());
                    self.celebrate(ConfettiKind::Standard);
                } else {
                    println!("  {} Removed from favorites", "♡".dimmed());
                }
            }
            BrowseCommand::Dark => {
                let dark = self.timeline.toggle_dark_mode();
                println!("  Dark mode {}", if dark { "on" } else { "off" });
                print_decade(&self.timeline);
            }
            BrowseCommand::Stats => {
                if self.timeline.toggle_stats_modal() {
                    print_stats(&self.timeline.stats(), self.palette());
                }
            }
            BrowseCommand::Music => {
                if self.timeline.toggle_music(&mut self.audio) {
                    println!("  🎵 {}", "Playing".green());
                } else {
                    println!("  🎵 {}", "Paused".dimmed());
                }
            }
            BrowseCommand::Help => print_help(),
            BrowseCommand::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// Execute browse command.
pub fn execute(config: &Config, seed: Option<&Path>) -> Result<()> {
    let timeline = build_timeline(config, seed)?;
    let mut visible = timeline.subscribe_visible();
    let mut session = Session {
        audio: PolicyAudioOutput::new(timeline.config().music.autoplay_allowed),
        timeline,
        confetti: None,
    };

    println!("{}", "🎂 שביל הזכרונות".bold());
    session.celebrate(ConfettiKind::Welcome);

    if let PlaybackOutcome::Blocked = session.timeline.request_music(&mut session.audio) {
        println!(
            "  {}",
            "Background music is waiting for you: type 'music' to start it".dimmed()
        );
    }

    print_decade(&session.timeline);
    visible.mark_unchanged();

    loop {
        let line: String = Input::new()
            .with_prompt(session.timeline.current_decade().to_string())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        session.audio.record_gesture();

        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {}", "⚠".yellow(), e);
                continue;
            }
        };

        match session.apply(command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                println!("{} {}", "⚠".yellow(), e);
                continue;
            }
        }

        if visible.has_changed().unwrap_or(false) {
            visible.mark_unchanged();
            print_decade(&session.timeline);
        }
    }

    println!("{} Bye", "✓".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_core::seed::sample_memories;

    fn session() -> Session {
        let timeline = Timeline::with_defaults(sample_memories()).unwrap();
        Session {
            audio: PolicyAudioOutput::new(false),
            timeline,
            confetti: None,
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(BrowseCommand::parse("").unwrap(), BrowseCommand::Show);
        assert_eq!(
            BrowseCommand::parse("next").unwrap(),
            BrowseCommand::Step(Direction::Next)
        );
        assert_eq!(
            BrowseCommand::parse("  goto   1990s ").unwrap(),
            BrowseCommand::Goto("1990s".to_string())
        );
        assert_eq!(
            BrowseCommand::parse("fav 7").unwrap(),
            BrowseCommand::Favorite("7".to_string())
        );
        assert_eq!(BrowseCommand::parse("q").unwrap(), BrowseCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            BrowseCommand::parse("open"),
            Err(InputError::missing("open", "a memory id"))
        );
        assert_eq!(
            BrowseCommand::parse("dance"),
            Err(InputError::UnknownCommand("dance".to_string()))
        );
    }

    #[tokio::test]
    async fn test_apply_navigation_and_favorites() {
        let mut session = session();
        assert_eq!(session.timeline.current_decade().to_string(), "2000s");

        assert!(session.apply(BrowseCommand::Step(Direction::Next)).unwrap());
        assert_eq!(session.timeline.current_decade().to_string(), "2010s");

        assert_eq!(
            session.apply(BrowseCommand::Goto("1970s".to_string())),
            Err(InputError::UnsupportedDecade("1970s".to_string()))
        );

        // memory 8 starts as a non-favorite
        session.apply(BrowseCommand::Favorite("8".to_string())).unwrap();
        assert_eq!(
            session.confetti.as_ref().map(ConfettiBurst::kind),
            Some(ConfettiKind::Standard)
        );
        assert_eq!(session.timeline.stats().favorites, 11);

        assert_eq!(
            session.apply(BrowseCommand::Favorite("999".to_string())),
            Err(InputError::MemoryNotFound("999".to_string()))
        );
        assert!(!session.apply(BrowseCommand::Quit).unwrap());
    }

    #[tokio::test]
    async fn test_music_needs_gesture_when_autoplay_blocked() {
        let mut session = session();
        session.apply(BrowseCommand::Music).unwrap();
        assert!(!session.timeline.is_music_playing());

        session.audio.record_gesture();
        session.apply(BrowseCommand::Music).unwrap();
        assert!(session.timeline.is_music_playing());
    }
}
