//! Card face text: number grouping and the slots text is written into.

pub const NUMBER_GROUPS: usize = 4;
const GROUP_LEN: usize = 4;

/// A text output slot on the card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSlot {
    NumberGroup(usize),
    Holder,
    Expiry,
}

impl TextSlot {
    /// Value of the `data-slot` attribute that marks the slot in markup.
    pub fn name(self) -> String {
        match self {
            TextSlot::NumberGroup(i) => format!("number-{i}"),
            TextSlot::Holder => "holder".to_string(),
            TextSlot::Expiry => "expiry".to_string(),
        }
    }
}

/// Split a card number into four display groups.
///
/// Whitespace-separated input keeps its own grouping; a single unbroken run
/// longer than one group is chunked into groups of four characters. Missing
/// groups are empty and anything past the fourth group is dropped.
pub fn split_card_number(input: &str) -> [String; NUMBER_GROUPS] {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut groups: [String; NUMBER_GROUPS] = Default::default();

    if let [run] = tokens.as_slice() {
        if run.chars().count() > GROUP_LEN {
            let chars: Vec<char> = run.chars().collect();
            for (slot, chunk) in groups.iter_mut().zip(chars.chunks(GROUP_LEN)) {
                *slot = chunk.iter().collect();
            }
            return groups;
        }
    }

    for (slot, token) in groups.iter_mut().zip(tokens) {
        *slot = token.to_string();
    }
    groups
}
