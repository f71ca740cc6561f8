pub const DEFAULT_TYPE_MS: u32 = 100;
pub const DEFAULT_DELETE_MS: u32 = 50;
pub const DEFAULT_HOLD_MS: u32 = 2_000;
pub const DEFAULT_NEXT_ROLE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_role_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_ms: DEFAULT_TYPE_MS,
            delete_ms: DEFAULT_DELETE_MS,
            hold_ms: DEFAULT_HOLD_MS,
            next_role_ms: DEFAULT_NEXT_ROLE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    roles: Vec<String>,
    config: TypingConfig,
    role_index: usize,
    visible_chars: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, config: TypingConfig) -> Self {
        Self {
            roles,
            config,
            role_index: 0,
            visible_chars: 0,
            phase: Phase::Typing,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn initial_delay(&self) -> Option<u32> {
        (!self.roles.is_empty()).then_some(self.config.type_ms)
    }

    pub fn text(&self) -> &str {
        let Some(role) = self.roles.get(self.role_index) else {
            return "";
        };
        let end = role
            .char_indices()
            .nth(self.visible_chars)
            .map(|(offset, _)| offset)
            .unwrap_or(role.len());
        &role[..end]
    }

    fn role_len(&self) -> usize {
        self.roles
            .get(self.role_index)
            .map(|role| role.chars().count())
            .unwrap_or(0)
    }

    pub fn advance(&mut self) -> Option<u32> {
        if self.roles.is_empty() {
            return None;
        }

        let delay = match self.phase {
            Phase::Typing => {
                self.visible_chars = (self.visible_chars + 1).min(self.role_len());
                if self.visible_chars >= self.role_len() {
                    self.phase = Phase::Holding;
                    self.config.hold_ms
                } else {
                    self.config.type_ms
                }
            }
            // The hold ends with the first deletion.
            Phase::Holding | Phase::Deleting => self.delete_one(),
        };

        Some(delay)
    }

    fn delete_one(&mut self) -> u32 {
        self.visible_chars = self.visible_chars.saturating_sub(1);
        if self.visible_chars == 0 {
            self.role_index = (self.role_index + 1) % self.roles.len();
            self.phase = Phase::Typing;
            self.config.next_role_ms
        } else {
            self.phase = Phase::Deleting;
            self.config.delete_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(roles: &[&str]) -> Typewriter {
        Typewriter::new(
            roles.iter().map(ToString::to_string).collect(),
            TypingConfig::default(),
        )
    }

    #[test]
    fn full_cycle_types_holds_deletes_and_wraps() {
        let mut typewriter = writer(&["ab", "c"]);
        assert_eq!(typewriter.initial_delay(), Some(100));
        assert_eq!(typewriter.text(), "");

        let mut trace = Vec::new();
        for _ in 0..10 {
            let delay = typewriter.advance().expect("roles present");
            trace.push((typewriter.text().to_string(), typewriter.role_index(), delay));
        }

        let expected = [
            ("a", 0, 100),
            ("ab", 0, 2_000),
            ("a", 0, 50),
            ("", 1, 500),
            ("c", 1, 2_000),
            ("", 0, 500),
            ("a", 0, 100),
            ("ab", 0, 2_000),
            ("a", 0, 50),
            ("", 1, 500),
        ];
        let expected: Vec<(String, usize, u32)> = expected
            .iter()
            .map(|(text, index, delay)| (text.to_string(), *index, *delay))
            .collect();
        assert_eq!(trace, expected);
    }

    #[test]
    fn multibyte_roles_are_typed_by_character() {
        let mut typewriter = writer(&["héllo"]);
        typewriter.advance();
        typewriter.advance();

        assert_eq!(typewriter.text(), "hé");
    }

    #[test]
    fn no_roles_means_no_ticks() {
        let mut typewriter = writer(&[]);

        assert_eq!(typewriter.initial_delay(), None);
        assert_eq!(typewriter.advance(), None);
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn empty_role_moves_straight_to_hold() {
        let mut typewriter = writer(&["", "x"]);

        assert_eq!(typewriter.advance(), Some(2_000));
        assert_eq!(typewriter.advance(), Some(500));
        assert_eq!(typewriter.role_index(), 1);
    }

    #[test]
    fn deletion_starts_as_soon_as_the_hold_ends() {
        let mut typewriter = writer(&["abc"]);
        for _ in 0..3 {
            typewriter.advance();
        }
        assert_eq!(typewriter.text(), "abc");

        // This tick fires hold_ms after the role was completed.
        assert_eq!(typewriter.advance(), Some(50));
        assert_eq!(typewriter.text(), "ab");
    }
}
