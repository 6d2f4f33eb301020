use std::cell::RefCell;
use std::rc::Rc;

use super::types::{InputSpec, ValueStore};

/// A host-owned widget holding one numeric value. `get` returns `None` when
/// the widget's content is not currently a readable number.
pub trait Control {
    fn get(&self) -> Option<f64>;
    fn set(&mut self, value: f64);
}

/// An input spec plus whatever controls the surrounding page actually has
/// for it. Either control may be absent; the harness skips what is missing.
pub struct BoundInput {
    spec: InputSpec,
    precise: Option<Box<dyn Control>>,
    coarse: Option<Box<dyn Control>>,
}

impl BoundInput {
    pub fn new(spec: InputSpec) -> Self {
        Self {
            spec,
            precise: None,
            coarse: None,
        }
    }

    pub fn with_precise(mut self, control: impl Control + 'static) -> Self {
        self.precise = Some(Box::new(control));
        self
    }

    pub fn with_coarse(mut self, control: impl Control + 'static) -> Self {
        self.coarse = Some(Box::new(control));
        self
    }
}

/// Everything a calculator page supplies: its inputs, a pure calculation
/// over the value store, and a render callback for the produced record.
pub struct CalculatorConfig<R> {
    pub inputs: Vec<BoundInput>,
    pub calculate: Box<dyn Fn(&ValueStore) -> R>,
    pub render: Box<dyn FnMut(&R)>,
}

enum Side {
    Precise,
    Coarse,
}

/// Binds dual-represented numeric inputs to a calculation and render pair,
/// recomputing synchronously on every change event the host forwards.
///
/// The harness owns its value store exclusively; no two calculator instances
/// share state. A panicking `calculate` or `render` closure propagates to the
/// caller, since a broken formula wiring is a programming error.
pub struct Calculator<R> {
    inputs: Vec<BoundInput>,
    calculate: Box<dyn Fn(&ValueStore) -> R>,
    render: Box<dyn FnMut(&R)>,
    values: ValueStore,
}

impl<R> Calculator<R> {
    /// Seeds the value store from each precise control where one exists,
    /// falling back to the input's default, then runs one update so the page
    /// starts populated before any interaction.
    pub fn new(config: CalculatorConfig<R>) -> Self {
        let mut values = ValueStore::default();
        for input in &config.inputs {
            let seeded = input
                .precise
                .as_ref()
                .and_then(|control| control.get())
                .unwrap_or(input.spec.default_value);
            values.set(&input.spec.name, seeded);
        }

        let mut calculator = Self {
            inputs: config.inputs,
            calculate: config.calculate,
            render: config.render,
            values,
        };
        calculator.update();
        calculator
    }

    /// Host change-event entry point for the precise field of `name`.
    pub fn precise_changed(&mut self, name: &str) {
        self.control_changed(name, Side::Precise);
    }

    /// Host change-event entry point for the coarse slider of `name`.
    pub fn coarse_changed(&mut self, name: &str) {
        self.control_changed(name, Side::Coarse);
    }

    /// Recomputes from the current values and renders the fresh record.
    pub fn update(&mut self) {
        let record = (self.calculate)(&self.values);
        (self.render)(&record);
    }

    /// Current value of a named input; unknown names read as zero.
    pub fn value(&self, name: &str) -> f64 {
        self.values.get(name)
    }

    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    fn control_changed(&mut self, name: &str, side: Side) {
        let Some(input) = self.inputs.iter_mut().find(|input| input.spec.name == name) else {
            return;
        };

        // Unreadable content counts as zero, like an empty field mid-edit.
        let value = match side {
            Side::Precise => {
                let Some(source) = input.precise.as_ref() else {
                    return;
                };
                let value = source.get().unwrap_or(0.0);
                if let Some(counterpart) = input.coarse.as_mut() {
                    counterpart.set(value);
                }
                value
            }
            Side::Coarse => {
                let Some(source) = input.coarse.as_ref() else {
                    return;
                };
                let value = source.get().unwrap_or(0.0);
                if let Some(counterpart) = input.precise.as_mut() {
                    counterpart.set(value);
                }
                value
            }
        };

        self.values.set(name, value);
        self.update();
    }
}

/// [`Control`] backed by a shared slot, for hosts that mirror widget state
/// into plain values. Cloning shares the slot, so the host keeps a handle to
/// a control it has handed to the harness.
#[derive(Clone, Default)]
pub struct SharedControl {
    slot: Rc<RefCell<Option<f64>>>,
}

impl SharedControl {
    pub fn new(initial: f64) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(initial))),
        }
    }

    /// A control whose content is not yet a readable number.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn read(&self) -> Option<f64> {
        *self.slot.borrow()
    }

    pub fn write(&self, value: f64) {
        *self.slot.borrow_mut() = Some(value);
    }
}

impl Control for SharedControl {
    fn get(&self) -> Option<f64> {
        self.read()
    }

    fn set(&mut self, value: f64) {
        self.write(value);
    }
}
