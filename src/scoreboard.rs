/// Cumulative points per player, kept in order of first submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    entries: Vec<(String, u32)>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == player)
            .map(|&(_, score)| score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `points` to `player`, creating the entry at zero first if needed.
    pub(crate) fn award(&mut self, player: &str, points: u32) -> u32 {
        let index = match self.entries.iter().position(|(name, _)| name == player) {
            Some(index) => index,
            None => {
                self.entries.push((player.to_string(), 0));
                self.entries.len() - 1
            }
        };
        let total = &mut self.entries[index].1;
        *total = total.saturating_add(points);
        *total
    }
}

impl<'a> IntoIterator for &'a Scoreboard {
    type Item = (&'a str, u32);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, u32)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
