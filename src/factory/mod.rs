//! Construction of objects by class name.
//!
//! A [`Factory`] binds class names, usually read from configuration at
//! runtime, to the closures that know how to build them. It is generic over
//! the base capability `B`, typically a trait object such as `dyn Renderable`.

mod error;

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::Dictionary;

pub use error::{CallShape, FactoryError};

type DefaultFn<B> = Box<dyn Fn() -> Box<B>>;
type DictionaryFn<B> = Box<dyn Fn(&Dictionary) -> Box<B>>;
type CreatorFn<B> = Box<dyn Fn(bool, &Dictionary) -> Option<Box<B>>>;

/// The strategies registered for one class name. At most one of each kind.
struct Strategies<B: ?Sized> {
    default: Option<DefaultFn<B>>,
    dictionary: Option<DictionaryFn<B>>,
    creator: Option<CreatorFn<B>>,
}

impl<B: ?Sized> Default for Strategies<B> {
    fn default() -> Self {
        Self {
            default: None,
            dictionary: None,
            creator: None,
        }
    }
}

impl<B: ?Sized> fmt::Debug for Strategies<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategies")
            .field("default", &self.default.is_some())
            .field("dictionary", &self.dictionary.is_some())
            .field("creator", &self.creator.is_some())
            .finish()
    }
}

/// Registry of construction strategies keyed by class name.
///
/// Strategy resolution is strict: [`create`](Self::create) uses the default
/// strategy and [`create_with`](Self::create_with) uses the dictionary
/// strategy. Neither substitutes for the other. A creator registered with
/// [`register_creator`](Self::register_creator) serves whichever call shape has
/// no dedicated strategy, receiving `false` and an empty dictionary for
/// `create`, or `true` and the caller's dictionary for `create_with`.
///
/// ## Example
///
/// ```
/// use dragon_dict::{Dictionary, Factory, FactoryError};
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
/// }
///
/// let mut factory: Factory<dyn Shape> = Factory::new();
/// factory.register_class(
///     "Square",
///     || Box::new(Square(1.0)),
///     |d| Box::new(Square(d.value("side").unwrap_or(1.0))),
/// );
///
/// let config = Dictionary::from([("side", 3.0)]);
/// let square = factory.create_with("Square", &config)?.unwrap();
/// assert_eq!(square.area(), 9.0);
///
/// assert!(matches!(
///     factory.create("Circle"),
///     Err(FactoryError::ClassNotFound(_))
/// ));
/// # Ok::<(), FactoryError>(())
/// ```
pub struct Factory<B: ?Sized> {
    classes: HashMap<String, Strategies<B>>,
}

impl<B: ?Sized> Default for Factory<B> {
    fn default() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }
}

impl<B: ?Sized> fmt::Debug for Factory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("classes", &self.classes)
            .finish()
    }
}

impl<B: ?Sized> Factory<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a zero-argument strategy for `name`, replacing any previous one.
    pub fn register_default<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn() -> Box<B> + 'static,
    {
        let name = name.into();
        debug!(class = %name, strategy = "default", "registering class");
        self.classes.entry(name).or_default().default = Some(Box::new(f));
        self
    }

    /// Registers a dictionary strategy for `name`, replacing any previous one.
    pub fn register_dictionary<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&Dictionary) -> Box<B> + 'static,
    {
        let name = name.into();
        debug!(class = %name, strategy = "dictionary", "registering class");
        self.classes.entry(name).or_default().dictionary = Some(Box::new(f));
        self
    }

    /// Registers both a default and a dictionary strategy for `name`.
    pub fn register_class<D, F>(&mut self, name: impl Into<String>, default: D, f: F) -> &mut Self
    where
        D: Fn() -> Box<B> + 'static,
        F: Fn(&Dictionary) -> Box<B> + 'static,
    {
        let name = name.into();
        self.register_default(name.clone(), default)
            .register_dictionary(name, f)
    }

    /// Registers a creator taking a flag and a dictionary.
    ///
    /// The flag is `true` when the caller supplied a dictionary. A creator may
    /// decline by returning `None`, which [`create`](Self::create) passes
    /// through as `Ok(None)`.
    pub fn register_creator<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(bool, &Dictionary) -> Option<Box<B>> + 'static,
    {
        let name = name.into();
        debug!(class = %name, strategy = "creator", "registering class");
        self.classes.entry(name).or_default().creator = Some(Box::new(f));
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Registered class names in ascending order.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Creates an instance of `name` without configuration.
    pub fn create(&self, name: &str) -> Result<Option<Box<B>>, FactoryError> {
        let strategies = self.lookup(name)?;
        if let Some(default) = &strategies.default {
            return Ok(Some(default()));
        }
        if let Some(creator) = &strategies.creator {
            return Ok(creator(false, &Dictionary::new()));
        }
        Err(FactoryError::Construction {
            class: name.to_owned(),
            shape: CallShape::Default,
        })
    }

    /// Creates an instance of `name` configured by `dictionary`.
    pub fn create_with(
        &self,
        name: &str,
        dictionary: &Dictionary,
    ) -> Result<Option<Box<B>>, FactoryError> {
        let strategies = self.lookup(name)?;
        if let Some(from_dictionary) = &strategies.dictionary {
            return Ok(Some(from_dictionary(dictionary)));
        }
        if let Some(creator) = &strategies.creator {
            return Ok(creator(true, dictionary));
        }
        Err(FactoryError::Construction {
            class: name.to_owned(),
            shape: CallShape::Dictionary,
        })
    }

    fn lookup(&self, name: &str) -> Result<&Strategies<B>, FactoryError> {
        self.classes
            .get(name)
            .ok_or_else(|| FactoryError::ClassNotFound(name.to_owned()))
    }
}
