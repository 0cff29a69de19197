pub const DEFAULT_TYPING_TEXT: &str = "Portfolio Elone LEVY";
pub const TYPING_START_DELAY_MS: f64 = 500.0;
pub const TYPING_INTERVAL_MS: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TypingEffect {
    chars: Vec<char>,
    shown: usize,
}

impl TypingEffect {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveals the next character; `None` once the whole text is shown.
    pub fn advance(&mut self) -> Option<char> {
        let next = *self.chars.get(self.shown)?;
        self.shown += 1;
        Some(next)
    }

    pub fn rendered(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn next_delay(&self) -> Option<f64> {
        match self.shown {
            _ if self.is_complete() => None,
            0 => Some(TYPING_START_DELAY_MS),
            _ => Some(TYPING_INTERVAL_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Scheduler;

    #[test]
    fn types_each_character_in_order_on_schedule() {
        let mut effect = TypingEffect::new(DEFAULT_TYPING_TEXT);
        let mut scheduler = Scheduler::new();
        let mut timeline = Vec::new();

        if let Some(delay) = effect.next_delay() {
            scheduler.schedule(delay, ());
        }

        for now in 0..=5_000 {
            for () in scheduler.advance_to(f64::from(now)) {
                if let Some(ch) = effect.advance() {
                    timeline.push((now, ch));
                }
                if let Some(delay) = effect.next_delay() {
                    scheduler.schedule(delay, ());
                }
            }
        }

        let typed: String = timeline.iter().map(|(_, ch)| *ch).collect();
        assert_eq!(typed, "Portfolio Elone LEVY");
        for (index, (at, _)) in timeline.iter().enumerate() {
            assert_eq!(*at, 500 + 100 * index as i32);
        }
        assert_eq!(effect.rendered(), DEFAULT_TYPING_TEXT);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn finished_effect_stays_finished() {
        let mut effect = TypingEffect::new("ok");

        assert_eq!(effect.advance(), Some('o'));
        assert_eq!(effect.rendered(), "o");
        assert_eq!(effect.advance(), Some('k'));
        assert!(effect.is_complete());
        assert_eq!(effect.advance(), None);
        assert_eq!(effect.next_delay(), None);
        assert_eq!(effect.rendered(), "ok");
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let mut effect = TypingEffect::new("Météo");
        let typed: Vec<char> = std::iter::from_fn(|| effect.advance()).collect();

        assert_eq!(typed, vec!['M', 'é', 't', 'é', 'o']);
    }

    #[test]
    fn empty_text_never_schedules() {
        let effect = TypingEffect::new("");

        assert!(effect.is_complete());
        assert_eq!(effect.next_delay(), None);
    }
}
