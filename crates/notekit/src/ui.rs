//! # Settings forms
//!
//! ## Overview
//!
//! Plugins describe their settings page as plain data, and hosts render it
//! with whatever widget toolkit they use. There is no state machine here:
//! when the user edits a control, the host sends the plugin a change event
//! carrying the item's key and its full new value, and the plugin applies
//! and persists it however it sees fit.

/// The control presented for a single settings item.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Control {
    /// A free-form text input.
    TextInput {
        /// Text shown while the input is empty.
        placeholder: String,

        /// The current value.
        value: String,
    },
}

/// A labeled item on a settings page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormItem {
    /// The key that change events for this item are routed by.
    pub key: String,

    /// The display name shown beside the control.
    pub name: String,

    /// A longer description of what the item configures.
    pub desc: String,

    /// The control used to edit the item.
    pub control: Control,
}

impl FormItem {
    /// Create an item edited through a free-form text input.
    pub fn text<K, N, D, P, V>(key: K, name: N, desc: D, placeholder: P, value: V) -> Self
    where
        K: Into<String>,
        N: Into<String>,
        D: Into<String>,
        P: Into<String>,
        V: Into<String>,
    {
        FormItem {
            key: key.into(),
            name: name.into(),
            desc: desc.into(),
            control: Control::TextInput {
                placeholder: placeholder.into(),
                value: value.into(),
            },
        }
    }
}

/// A settings page described by a plugin.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Form {
    /// The items to render, in order.
    pub items: Vec<FormItem>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Form { items: Vec::new() }
    }

    /// Append an item to the form.
    pub fn item(mut self, item: FormItem) -> Self {
        self.items.push(item);

        return self;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_builder() {
        let form = Form::new()
            .item(FormItem::text("one", "One", "First item.", "Type here", "a"))
            .item(FormItem::text("two", "Two", "Second item.", "", "b"));

        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[0].key, "one");
        assert_eq!(
            form.items[1].control,
            Control::TextInput { placeholder: "".into(), value: "b".into() }
        );
    }
}
