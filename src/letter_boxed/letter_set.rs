use std::fmt;

/// Set of lowercase ascii letters packed into a bitmask
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct LetterSet {
    // bit i is one if ('a' + i) is in the set
    accepted: u32,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { accepted: 0 }
    }

    pub fn contains(&self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.accepted & bit != 0,
            None => false,
        }
    }

    /// Inserts the letter. Returns false if the letter can not be represented.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                self.accepted |= bit;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.accepted.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(move |&l| self.contains(l))
    }

    fn bit(letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter as u32 - 'a' as u32))
        } else {
            None
        }
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::iter::FromIterator<char> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut tmp = Self::default();
        iter.into_iter().for_each(|l| {
            tmp.insert(l);
        });
        tmp
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for l in self.iter() {
            write!(f, "{}", l.to_ascii_uppercase())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::LetterSet;

    #[test]
    fn test_insert_and_contains() {
        let set: LetterSet = "btl".chars().collect();
        assert!(set.contains('b'));
        assert!(set.contains('t'));
        assert!(set.contains('l'));
        assert!(!set.contains('e'));
        assert_eq!(set.len(), 3);
        assert_eq!(format!("{:?}", set), "[BLT]");
    }

    #[test]
    fn test_rejects_non_lowercase() {
        let mut set = LetterSet::empty();
        assert!(!set.insert('B'));
        assert!(!set.insert('ø'));
        assert!(set.is_empty());
        assert!(!set.contains('ø'));
    }
}
