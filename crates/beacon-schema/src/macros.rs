/// Declarative macro generating a closed string vocabulary.
///
/// Each member maps to exactly one wire literal. The generated enum gets
/// `ALL`, `as_str`, `Display`, `FromStr` (rejecting anything outside the
/// vocabulary with [`SchemaError::UnknownMember`](crate::SchemaError)) and
/// serde support as the bare string.
///
/// The caller must have `Serialize` and `Deserialize` in scope.
macro_rules! define_vocabulary {
    (
        $(#[doc = $doc:literal])*
        $name:ident {
            $(
                $(#[doc = $vdoc:literal])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[doc = $vdoc])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $name {
            /// Every member in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Wire string sent downstream.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::SchemaError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    _ => Err($crate::errors::SchemaError::UnknownMember {
                        vocabulary: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

/// Declarative macro generating zero-sized types for fields pinned to a
/// single vocabulary member.
///
/// `Name => Vocabulary::Member` yields a unit struct that serializes as the
/// member's wire string and refuses every other member on decode, so a
/// pinned field can neither be built nor decoded with the wrong value.
///
/// The caller must have `Serialize` and `Deserialize` in scope.
macro_rules! define_pinned {
    (
        $(
            $(#[doc = $doc:literal])*
            $name:ident => $vocab:ident :: $member:ident
        ),* $(,)?
    ) => {
        $(
            $(#[doc = $doc])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl $name {
                /// The only value this field can hold.
                pub const VALUE: $vocab = $vocab::$member;
            }

            impl From<$name> for $vocab {
                fn from(_: $name) -> Self {
                    $name::VALUE
                }
            }

            impl PartialEq<$vocab> for $name {
                fn eq(&self, other: &$vocab) -> bool {
                    Self::VALUE == *other
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(Self::VALUE.as_str())
                }
            }

            impl Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    Self::VALUE.serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let value = $vocab::deserialize(deserializer)?;
                    if value == Self::VALUE {
                        Ok(Self)
                    } else {
                        Err(serde::de::Error::invalid_value(
                            serde::de::Unexpected::Str(value.as_str()),
                            &Self::VALUE.as_str(),
                        ))
                    }
                }
            }
        )*
    };
}

/// Declarative macro generating `ActionType`, `ALL_ACTION_TYPES`, the
/// `Event` union, `EventSchema` impls, and domain predicates from a single
/// source-of-truth table.
///
/// # Sections
///
/// - **`events`**: `Variant => "wireTag" => "warehouse_table" => SchemaType`.
///   One row per event kind; a kind cannot exist without its schema.
/// - **`domain_groups`**: `method => Domain => [Variants]`. Each group yields
///   a boolean predicate and one arm of `ActionType::domain`; every variant
///   belongs to exactly one group.
///
/// Every generated `match` is exhaustive with no wildcard arm, so adding a
/// row forces every dispatch site to handle it.
macro_rules! define_events {
    (
        events {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident => $wire:literal => $table:literal => $schema:ty
            ),* $(,)?
        }
        domain_groups {
            $(
                $(#[doc = $gdoc:literal])*
                $method:ident => $domain:ident => [$($gv:ident),* $(,)?]
            ),* $(,)?
        }
    ) => {
        // ── ActionType enum ─────────────────────────────────────────

        /// The top-level actions an [`Event`] describes.
        ///
        /// Each variant serializes to its wire tag (e.g.
        /// `"tappedMainArtworkGrid"`) and corresponds with one warehouse
        /// table (see [`ActionType::table_name`]).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ActionType {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        // ── ALL_ACTION_TYPES constant ───────────────────────────────

        /// All action types in definition order.
        pub const ALL_ACTION_TYPES: [ActionType; { [$($wire,)*].len() }] = [
            $(ActionType::$variant,)*
        ];

        // ── ActionType methods ──────────────────────────────────────

        impl ActionType {
            /// Canonical wire tag (e.g. `"tappedMainArtworkGrid"`).
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }

            /// Warehouse table receiving events of this kind
            /// (e.g. `"rail_viewed"`).
            #[must_use]
            pub fn table_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $table,)*
                }
            }

            /// Interaction domain this kind belongs to.
            #[must_use]
            pub fn domain(self) -> EventDomain {
                match self {
                    $($(Self::$gv)|* => EventDomain::$domain,)*
                }
            }

            // ── Domain group methods ────────────────────────────────

            $(
                $(#[doc = $gdoc])*
                #[must_use]
                pub fn $method(self) -> bool {
                    matches!(self, $(Self::$gv)|*)
                }
            )*
        }

        impl std::fmt::Display for ActionType {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for ActionType {
            type Err = $crate::errors::SchemaError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    _ => Err($crate::errors::SchemaError::UnknownAction(s.to_owned())),
                }
            }
        }

        // ── Event union ─────────────────────────────────────────────

        /// Master union of valid analytics event shapes.
        ///
        /// Serialized with the `action` key as an internal tag followed by the
        /// schema's own fields, which is exactly the record sent downstream.
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "action")]
        pub enum Event {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire)]
                $variant($schema),
            )*
        }

        impl Event {
            /// Action tag of this event.
            #[must_use]
            pub fn action(&self) -> ActionType {
                match self {
                    $(Self::$variant(_) => ActionType::$variant,)*
                }
            }
        }

        // ── Schema bindings ─────────────────────────────────────────

        $(
            impl EventSchema for $schema {
                const ACTION: ActionType = ActionType::$variant;
            }

            impl From<$schema> for Event {
                fn from(schema: $schema) -> Self {
                    Self::$variant(schema)
                }
            }
        )*
    };
}
