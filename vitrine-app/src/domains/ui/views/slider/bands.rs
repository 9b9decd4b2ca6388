//! Window index calculation.
//!
//! Pure modular-index arithmetic: given the item count and a reference
//! index, produce the ordered index bands the slider renders. The
//! backward and forward bands exist purely to pre-render wrap-adjacent
//! content so a page transition across the catalog boundary has real
//! children to animate into instead of a blank flash.

/// Indices stepping forward from `from`, wrapping modulo `len`.
///
/// `from` may be `-1`, meaning "one before index 0". Once a wrap has
/// occurred, additional wrapped indices are only appended on an edge
/// page (first or last); interior pages suppress the duplicates after
/// the first wrapped index to avoid showing the same item twice next
/// to itself. The result length is therefore at most `count`.
pub fn forward_indexes(len: usize, from: isize, count: usize, edge_page: bool) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let len = len as isize;
    let mut exceeded = false;
    let mut indexes = Vec::with_capacity(count);
    for step in 1..=count as isize {
        let candidate = from + step;
        if candidate >= len {
            if !exceeded || edge_page {
                indexes.push(candidate.rem_euclid(len) as usize);
            }
            exceeded = true;
        } else {
            indexes.push(candidate.rem_euclid(len) as usize);
        }
    }
    indexes
}

/// Mirror of [`forward_indexes`]: steps backward from `from`, wrapping
/// below zero, with the same edge-page suppression. Returned in
/// ascending display order so `[backward, visible, forward]`
/// concatenates into correct left-to-right cyclic order.
pub fn backward_indexes(len: usize, from: isize, count: usize, edge_page: bool) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let len = len as isize;
    let mut exceeded = false;
    let mut indexes = Vec::with_capacity(count);
    for step in 1..=count as isize {
        let candidate = from - step;
        if candidate < 0 {
            if !exceeded || edge_page {
                indexes.push(candidate.rem_euclid(len) as usize);
            }
            exceeded = true;
        } else {
            indexes.push(candidate as usize);
        }
    }
    indexes.reverse();
    indexes
}

/// The three disjoint index bands rendered by a slider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowBands {
    pub backward: Vec<usize>,
    pub visible: Vec<usize>,
    pub forward: Vec<usize>,
}

/// Whether an entry is the real visible copy of an item or one of the
/// pre-rendered wrap-padding copies. The same logical item may appear
/// once per kind simultaneously; that duplication is intentional and
/// required for seamless wrap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Padding,
    Visible,
}

/// One rendered slider child: an item index tagged with its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderEntry {
    pub kind: EntryKind,
    pub index: usize,
}

impl WindowBands {
    /// Bands for a slider that does not page: everything visible, no
    /// padding.
    pub fn trivial(len: usize) -> Self {
        Self {
            backward: Vec::new(),
            visible: (0..len).collect(),
            forward: Vec::new(),
        }
    }

    /// All rendered entries in left-to-right display order.
    pub fn entries(&self) -> impl Iterator<Item = SliderEntry> + '_ {
        let padding = |index: &usize| SliderEntry {
            kind: EntryKind::Padding,
            index: *index,
        };
        self.backward
            .iter()
            .map(padding)
            .chain(self.visible.iter().map(|index| SliderEntry {
                kind: EntryKind::Visible,
                index: *index,
            }))
            .chain(self.forward.iter().map(padding))
    }

    /// Total rendered child count.
    pub fn len(&self) -> usize {
        self.backward.len() + self.visible.len() + self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
