//! Starting professions and their stat blocks.
//!
//! The table is read from a book's `Adventurers.xml`:
//!
//! ```xml
//! <adventurers>
//!   <stamina amount="9"/>
//!   <rank amount="1"/>
//!   <gold amount="16"/>
//!   <abilities>
//!     <profession name="Priest">4 2 3 6 4 2</profession>
//!   </abilities>
//!   <items>
//!     <weapon name="mace" profession="Priest"/>
//!     <armor name="leather" bonus="1"/>
//!   </items>
//!   <starting>
//!     <adventurer name="Marana" profession="Priest">A priestess.</adventurer>
//!   </starting>
//! </adventurers>
//! ```
//!
//! Stamina, rank and gold are shared by every profession. An item without a
//! `profession` attribute belongs to everybody.

use std::collections::HashMap;

use jafl_common::capitalize;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{AdventurersError, RenderError};
use crate::templates;

/// One piece of starting equipment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equipment {
    /// Item name, e.g. `mace`.
    pub name: String,
    /// Item type, taken from the element name, e.g. `weapon`.
    pub kind: String,
    /// Bonus, empty when the item has none.
    pub bonus: String,
}

/// Starting stats of one profession.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profession {
    /// Profession name, also the lookup key.
    pub name: String,
    /// Name of the pre-made adventurer.
    pub person_name: String,
    /// Flavour text of the pre-made adventurer.
    pub description: String,
    /// Starting rank.
    pub rank: String,
    /// Starting stamina.
    pub stamina: String,
    /// Starting gold.
    pub gold: String,
    /// Charisma, Combat, Magic, Sanctity, Scouting, Thievery.
    pub abilities: Vec<String>,
    /// Starting equipment, in file order.
    pub equipment: Vec<Equipment>,
}

impl Profession {
    /// Render the `stats-sheet` table for this profession.
    ///
    /// # Errors
    ///
    /// Fails when the profession does not list exactly six ability scores.
    pub fn stat_block(&self) -> Result<String, RenderError> {
        let [cha, com, mag, san, sco, thi] = self.abilities.as_slice() else {
            return Err(RenderError::Abilities {
                profession: self.name.clone(),
                found: self.abilities.len(),
            });
        };

        let equipment: String = self
            .equipment
            .iter()
            .map(|item| {
                let mut name = capitalize(&item.name);
                if !item.bonus.is_empty() {
                    name = format!("{name} (+{})", item.bonus);
                }
                templates::equipment_row(&capitalize(&item.kind), &name)
            })
            .collect();

        Ok(templates::stats_sheet(
            &self.name,
            [cha, com, mag, san, sco, thi].map(String::as_str),
            &self.stamina,
            &self.rank,
            &self.gold,
            &equipment,
        ))
    }
}

/// Read-only profession lookup, keyed by profession name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionTable {
    professions: HashMap<String, Profession>,
}

impl ProfessionTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profession under its name. A later registration with the
    /// same name replaces the earlier one.
    pub fn insert(&mut self, profession: Profession) {
        let _ = self
            .professions
            .insert(profession.name.clone(), profession);
    }

    /// Number of registered professions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.professions.len()
    }

    /// Whether no profession is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.professions.is_empty()
    }

    /// Registered profession names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.professions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Look a profession up by name.
    ///
    /// # Errors
    ///
    /// [`RenderError::UnknownProfession`] listing every registered name.
    pub fn lookup(&self, name: &str) -> Result<&Profession, RenderError> {
        self.professions
            .get(name)
            .ok_or_else(|| RenderError::UnknownProfession {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// Parse an `Adventurers.xml` document.
    ///
    /// # Errors
    ///
    /// Fails when the document or one of its attributes is malformed.
    pub fn from_adventurers_xml(xml: &str) -> Result<Self, AdventurersError> {
        let raw = RawAdventurers::read(xml)?;

        let mut table = Self::new();
        for adventurer in raw.adventurers {
            let abilities = raw
                .abilities
                .iter()
                .find(|(profession, _)| *profession == adventurer.profession)
                .map(|(_, scores)| scores.clone())
                .unwrap_or_default();
            let equipment = raw
                .items
                .iter()
                .filter(|(profession, _)| {
                    profession.is_empty() || *profession == adventurer.profession
                })
                .map(|(_, item)| item.clone())
                .collect();

            table.insert(Profession {
                name: adventurer.profession,
                person_name: adventurer.name,
                description: adventurer.description,
                rank: raw.rank.clone(),
                stamina: raw.stamina.clone(),
                gold: raw.gold.clone(),
                abilities,
                equipment,
            });
        }
        log::debug!(
            target: "jafl::render",
            "loaded {} starting professions",
            table.len()
        );
        Ok(table)
    }
}

// =============================================================================
// Adventurers.xml reader
// =============================================================================

#[derive(Default)]
struct RawAdventurer {
    name: String,
    profession: String,
    description: String,
}

/// Flat view of the document before it is joined per profession.
#[derive(Default)]
struct RawAdventurers {
    stamina: String,
    rank: String,
    gold: String,
    /// (profession, scores)
    abilities: Vec<(String, Vec<String>)>,
    /// (profession, item); empty profession means everybody.
    items: Vec<(String, Equipment)>,
    adventurers: Vec<RawAdventurer>,
}

impl RawAdventurers {
    fn read(xml: &str) -> Result<Self, AdventurersError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut raw = Self::default();
        // Element names from the root down to the current element.
        let mut path: Vec<String> = Vec::new();
        // Text collected for the open `<profession>` or `<adventurer>`.
        let mut text = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    raw.open(&e, &path)?;
                    let name = element_name(&e);
                    if collects_text(&name) {
                        text.clear();
                    }
                    path.push(name);
                }
                Event::Empty(e) => raw.open(&e, &path)?,
                Event::Text(e) => text.push_str(&String::from_utf8_lossy(&e)),
                Event::End(_) => {
                    let closed = path.pop().unwrap_or_default();
                    raw.close(&closed, &path, &text);
                    if collects_text(&closed) {
                        text.clear();
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(raw)
    }

    /// Handle an opening or self-closing tag whose parents are `path`.
    fn open(&mut self, e: &BytesStart<'_>, path: &[String]) -> Result<(), AdventurersError> {
        let name = element_name(e);
        let parents: Vec<&str> = path.iter().map(String::as_str).collect();
        match (parents.as_slice(), name.as_str()) {
            (["adventurers"], "stamina") => self.stamina = attribute(e, "amount")?,
            (["adventurers"], "rank") => self.rank = attribute(e, "amount")?,
            (["adventurers"], "gold") => self.gold = attribute(e, "amount")?,
            (["adventurers", "abilities"], "profession") => {
                self.abilities.push((attribute(e, "name")?, Vec::new()));
            }
            (["adventurers", "items"], _) => self.items.push((
                attribute(e, "profession")?,
                Equipment {
                    name: attribute(e, "name")?,
                    kind: name,
                    bonus: attribute(e, "bonus")?,
                },
            )),
            (["adventurers", "starting"], "adventurer") => self.adventurers.push(RawAdventurer {
                name: attribute(e, "name")?,
                profession: attribute(e, "profession")?,
                description: String::new(),
            }),
            _ => {}
        }
        Ok(())
    }

    /// Handle the closing tag of `name`, now that `path` holds its parents.
    fn close(&mut self, name: &str, path: &[String], text: &str) {
        let parents: Vec<&str> = path.iter().map(String::as_str).collect();
        match (parents.as_slice(), name) {
            (["adventurers", "abilities"], "profession") => {
                if let Some((_, scores)) = self.abilities.last_mut() {
                    *scores = text.split_whitespace().map(str::to_string).collect();
                }
            }
            (["adventurers", "starting"], "adventurer") => {
                if let Some(adventurer) = self.adventurers.last_mut() {
                    adventurer.description = text.trim().to_string();
                }
            }
            _ => {}
        }
    }
}

fn collects_text(name: &str) -> bool {
    matches!(name, "profession" | "adventurer")
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Attribute value, `""` when absent.
fn attribute(e: &BytesStart<'_>, key: &str) -> Result<String, AdventurersError> {
    match e.try_get_attribute(key)? {
        Some(attr) => Ok(attr.unescape_value()?.into_owned()),
        None => Ok(String::new()),
    }
}
