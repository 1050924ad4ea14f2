use crate::util::{
    math::{Coefficients, Polynomial, Terms},
    trace::{TraceBuffer, TraceError},
};

/// Every curve family offered in the side panel, in display order.
pub const CATALOG: [(&str, Terms); 7] = [
    ("ax2+bx+c", Terms::all()),
    ("ax2+bx", Terms::QUADRATIC.union(Terms::LINEAR)),
    ("ax2+c", Terms::QUADRATIC.union(Terms::CONSTANT)),
    ("ax2", Terms::QUADRATIC),
    ("bx+c", Terms::LINEAR.union(Terms::CONSTANT)),
    ("bx", Terms::LINEAR),
    ("c", Terms::CONSTANT),
];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FamilyError {
    #[error("No curve family named `{0}`")]
    UnknownFamily(String),
    #[error(transparent)]
    Trace(#[from] TraceError),
}

pub struct CurveFamily {
    name: &'static str,
    terms: Terms,
    poly: Polynomial<f64>,
    visible: bool,
    history: TraceBuffer<Polynomial<f64>>,
}

impl CurveFamily {
    pub fn new(
        name: &'static str,
        terms: Terms,
        history: TraceBuffer<Polynomial<f64>>,
    ) -> Self {
        Self {
            name,
            terms,
            poly: Polynomial::masked(Coefficients::default().ascending(), terms),
            visible: false,
            history,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn poly(&self) -> &Polynomial<f64> {
        &self.poly
    }

    pub fn history(&self) -> &TraceBuffer<Polynomial<f64>> {
        &self.history
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_params(&mut self, coefficients: Coefficients) {
        self.poly = Polynomial::masked(coefficients.ascending(), self.terms);
    }

    /// Hidden families forget their traces.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.history.clear();
        }
    }

    /// Records the current curve if the family is shown.
    pub fn update(&mut self) {
        if self.visible {
            self.history.push(self.poly);
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    fn resize_history(&mut self, max_len: usize) -> Result<(), TraceError> {
        self.history.resize(max_len)
    }
}

pub struct FamilySet {
    families: Vec<CurveFamily>,
}

impl Default for FamilySet {
    fn default() -> Self {
        Self {
            families: CATALOG
                .iter()
                .map(|&(name, terms)| CurveFamily::new(name, terms, Default::default()))
                .collect(),
        }
    }
}

impl FamilySet {
    /// The full catalog, every history bounded by `max_len`.
    pub fn with_trace_size(max_len: usize) -> Result<Self, FamilyError> {
        let families = CATALOG
            .iter()
            .map(|&(name, terms)| Ok(CurveFamily::new(name, terms, TraceBuffer::new(max_len)?)))
            .collect::<Result<_, FamilyError>>()?;
        Ok(Self { families })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurveFamily> {
        self.families.iter()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Result<&CurveFamily, FamilyError> {
        self.families
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FamilyError::UnknownFamily(name.to_owned()))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut CurveFamily, FamilyError> {
        self.families
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FamilyError::UnknownFamily(name.to_owned()))
    }

    pub fn show(&mut self, name: &str, visible: bool) -> Result<(), FamilyError> {
        self.get_mut(name)?.set_visible(visible);
        log::debug!("{} {}", if visible { "showing" } else { "hiding" }, name);
        Ok(())
    }

    pub fn set_params(&mut self, coefficients: Coefficients) {
        for family in &mut self.families {
            family.set_params(coefficients);
        }
    }

    pub fn update_all(&mut self) {
        for family in &mut self.families {
            family.update();
        }
    }

    pub fn clear_all(&mut self) {
        for family in &mut self.families {
            family.clear();
        }
    }

    pub fn trace_size(&self) -> usize {
        self.families
            .first()
            .map_or(crate::util::trace::DEFAULT_TRACE_SIZE, |f| f.history.max_len())
    }

    /// Applies a new trace bound to every family, clearing their histories.
    pub fn set_trace_size(&mut self, max_len: usize) -> Result<(), FamilyError> {
        for family in &mut self.families {
            family.resize_history(max_len)?;
        }
        log::info!("trace buffer size set to {}", max_len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_names_and_masks() {
        for (i, (name, terms)) in CATALOG.iter().enumerate() {
            for (other_name, other_terms) in &CATALOG[i + 1..] {
                assert_ne!(name, other_name);
                assert_ne!(terms, other_terms);
            }
        }
        assert_eq!(FamilySet::default().iter().count(), 7);
    }

    #[test]
    fn masks_follow_names() {
        let set = FamilySet::default();
        assert_eq!(set.get("ax2+bx+c").unwrap().terms, Terms::all());
        assert_eq!(set.get("bx+c").unwrap().terms, Terms::LINEAR | Terms::CONSTANT);
        assert_eq!(set.get("c").unwrap().terms, Terms::CONSTANT);
    }

    #[test]
    fn built_with_requested_trace_size() {
        let set = FamilySet::with_trace_size(12).unwrap();
        assert_eq!(set.trace_size(), 12);
        assert!(set.iter().all(|f| f.history().max_len() == 12));
        assert_eq!(set.iter().count(), CATALOG.len());

        assert_eq!(
            FamilySet::with_trace_size(0).err(),
            Some(FamilyError::Trace(TraceError::ZeroCapacity))
        );
    }

    #[test]
    fn params_are_masked_per_family() {
        let mut set = FamilySet::default();
        set.set_params(Coefficients { a: 2, b: 3, c: 4 });

        assert_eq!(set.get("ax2+bx+c").unwrap().poly().eval(1.0), 9.0);
        assert_eq!(set.get("ax2+c").unwrap().poly().eval(1.0), 6.0);
        assert_eq!(set.get("bx").unwrap().poly().eval(1.0), 3.0);
        assert_eq!(set.get("ax2").unwrap().poly().eval(0.0), 0.0);
    }

    #[test]
    fn unknown_family_is_an_error() {
        let mut set = FamilySet::default();
        assert_eq!(
            set.show("x3", true),
            Err(FamilyError::UnknownFamily("x3".to_owned()))
        );
        assert!(set.get("").is_err());
    }

    #[test]
    fn only_visible_families_record_traces() {
        let mut set = FamilySet::default();
        set.show("bx", true).unwrap();
        set.update_all();
        set.update_all();

        assert_eq!(set.get("bx").unwrap().history().len(), 2);
        assert!(set.get("c").unwrap().history().is_empty());
    }

    #[test]
    fn hiding_clears_history() {
        let mut set = FamilySet::default();
        set.show("ax2", true).unwrap();
        set.update_all();
        set.show("ax2", false).unwrap();

        let family = set.get("ax2").unwrap();
        assert!(!family.is_visible());
        assert!(family.history().is_empty());
    }

    #[test]
    fn history_snapshots_follow_params() {
        let mut set = FamilySet::default();
        set.show("c", true).unwrap();
        for c in 0..5 {
            set.set_params(Coefficients { a: 0, b: 0, c });
            set.update_all();
        }
        let constants: Vec<f64> = set
            .get("c")
            .unwrap()
            .history()
            .iter()
            .map(|p| p.eval(0.0))
            .collect();
        assert_eq!(constants, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn trace_size_applies_to_every_family() {
        let mut set = FamilySet::default();
        set.show("bx+c", true).unwrap();
        for _ in 0..10 {
            set.update_all();
        }

        set.set_trace_size(3).unwrap();
        assert_eq!(set.trace_size(), 3);
        assert!(set.iter().all(|f| f.history().is_empty() && f.history().max_len() == 3));

        for _ in 0..10 {
            set.update_all();
        }
        assert_eq!(set.get("bx+c").unwrap().history().len(), 3);
    }

    #[test]
    fn zero_trace_size_is_rejected() {
        let mut set = FamilySet::default();
        assert_eq!(
            set.set_trace_size(0),
            Err(FamilyError::Trace(TraceError::ZeroCapacity))
        );
        assert_eq!(set.trace_size(), crate::util::trace::DEFAULT_TRACE_SIZE);
    }
}
