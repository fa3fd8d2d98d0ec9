use smartcow::SmartCow;
use std::ops::Deref;

/// A single named param and the raw url segment bound to it
#[derive(Debug, Clone)]
pub struct Binding<'name, 'value> {
    name: SmartCow<'name>,
    value: SmartCow<'value>,
}

impl<'name, 'value> Binding<'name, 'value> {
    pub fn new(name: impl Into<SmartCow<'name>>, value: impl Into<SmartCow<'value>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// the param name, as written in the pattern
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the url segment, exactly as it appeared in the url
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_owned(self) -> Binding<'static, 'static> {
        Binding {
            name: self.name.into_owned(),
            value: self.value.into_owned(),
        }
    }
}

impl PartialEq for Binding<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.value() == other.value()
    }
}

impl Eq for Binding<'_, '_> {}

/// Params bound by a successful match, in pattern order.
///
/// Names are not deduplicated; a pattern like `/:a/:a` binds `a` twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings<'names, 'values>(Vec<Binding<'names, 'values>>);

impl<'names, 'values> Bindings<'names, 'values> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'names str, value: &'values str) {
        self.0.push(Binding::new(name, value));
    }

    pub fn into_owned(self) -> Bindings<'static, 'static> {
        Bindings(self.0.into_iter().map(Binding::into_owned).collect())
    }

    /// detaches the names from the pattern they were borrowed from,
    /// keeping the values borrowed from the url
    pub(crate) fn into_owned_names(self) -> Bindings<'static, 'values> {
        Bindings(
            self.0
                .into_iter()
                .map(|Binding { name, value }| Binding {
                    name: name.into_owned(),
                    value,
                })
                .collect(),
        )
    }

    /// the first value bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find_map(|binding| (binding.name() == name).then(|| binding.value()))
    }

    /// (name, value) pairs in pattern order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|binding| (binding.name(), binding.value()))
    }
}

impl<'names, 'values> Deref for Bindings<'names, 'values> {
    type Target = [Binding<'names, 'values>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'names, 'values> IntoIterator for Bindings<'names, 'values> {
    type Item = Binding<'names, 'values>;
    type IntoIter = std::vec::IntoIter<Binding<'names, 'values>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'name, 'value> From<(&'name str, &'value str)> for Binding<'name, 'value> {
    fn from((name, value): (&'name str, &'value str)) -> Self {
        Self::new(name, value)
    }
}

impl<'names, 'values> FromIterator<(&'names str, &'values str)> for Bindings<'names, 'values> {
    fn from_iter<T: IntoIterator<Item = (&'names str, &'values str)>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'names, 'values> Extend<(&'names str, &'values str)> for Bindings<'names, 'values> {
    fn extend<T: IntoIterator<Item = (&'names str, &'values str)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.push(name, value);
        }
    }
}
