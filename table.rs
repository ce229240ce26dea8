use crate::RichEnum;

/// A declared name and the enum value it stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry<E> {
    pub name: &'static str,
    pub value: E,
}

impl<E> Entry<E> {
    pub const fn new(name: &'static str, value: E) -> Self {
        Self { name, value }
    }
}

/// Immutable bidirectional index over the entries of one enum.
///
/// Both directions are sorted slices searched with a binary search, so lookups never allocate.
/// When two names share a value, the name declared first is the one returned by
/// [`LookupTable::name_for()`]; both names still parse. A name declared twice keeps only its first
/// entry, which cannot happen for types set up through the declaration macros.
#[derive(Debug)]
pub struct LookupTable<E: RichEnum> {
    by_value: Box<[Entry<E>]>,
    by_name: Box<[Entry<E>]>,
}

impl<E: RichEnum> LookupTable<E> {
    pub fn new(entries: &[Entry<E>]) -> Self {
        let mut indexed: Vec<(usize, Entry<E>)> = entries.iter().copied().enumerate().collect();

        indexed.sort_by(|(_, l), (_, r)| l.name.as_bytes().cmp(r.name.as_bytes()));
        indexed.dedup_by(|(later, dropped), (_, kept)| {
            if dropped.name != kept.name {
                return false;
            }
            tracing::warn!(
                type_name = E::TYPE_NAME,
                name = dropped.name,
                index = *later,
                "ignoring entry with a name declared earlier"
            );
            true
        });
        let by_name: Box<[_]> = indexed.iter().map(|(_, entry)| *entry).collect();

        indexed.sort_by_key(|(index, entry)| (entry.value.to_repr(), *index));
        indexed.dedup_by_key(|(_, entry)| entry.value.to_repr());
        let by_value: Box<[_]> = indexed.into_iter().map(|(_, entry)| entry).collect();

        tracing::debug!(
            type_name = E::TYPE_NAME,
            names = by_name.len(),
            values = by_value.len(),
            "built enum lookup table"
        );
        Self { by_value, by_name }
    }

    pub fn type_name(&self) -> &'static str {
        E::TYPE_NAME
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn name_for(&self, raw: E::Repr) -> Option<&'static str> {
        self.entry_for_repr(raw).map(|entry| entry.name)
    }

    pub fn value_for_repr(&self, raw: E::Repr) -> Option<E> {
        self.entry_for_repr(raw).map(|entry| entry.value)
    }

    /// Whole-input, case-sensitive match. A prefix or extension of a name does not match.
    pub fn value_for(&self, text: &[u8]) -> Option<E> {
        if text.is_empty() {
            return None;
        }
        self.by_name
            .binary_search_by(|entry| entry.name.as_bytes().cmp(text))
            .ok()
            .map(|index| self.by_name[index].value)
    }

    fn entry_for_repr(&self, raw: E::Repr) -> Option<&Entry<E>> {
        self.by_value
            .binary_search_by_key(&raw, |entry| entry.value.to_repr())
            .ok()
            .map(|index| &self.by_value[index])
    }
}
