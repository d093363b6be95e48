use crate::error::{Result, SprintError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

/// A registry member addressable by a short unique alias.
pub trait Keyed {
    fn lookup(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub lookup: String,
    pub first_name: String,
    pub last_name: String,
}

impl TeamMember {
    pub fn new(
        lookup: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            lookup: lookup.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Keyed for TeamMember {
    fn lookup(&self) -> &str {
        &self.lookup
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeMember {
    pub lookup: String,
    pub description: String,
}

impl ThemeMember {
    pub fn new(lookup: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            lookup: lookup.into(),
            description: description.into(),
        }
    }
}

impl Keyed for ThemeMember {
    fn lookup(&self) -> &str {
        &self.lookup
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Insertion-ordered mapping from lookup alias to member, with alias
/// uniqueness enforced on add. Loading from an absent or empty file yields
/// an empty registry; saving is an explicit full overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<M> {
    members: Vec<M>,
}

pub type Team = Registry<TeamMember>;
pub type Themes = Registry<ThemeMember>;

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<M: Keyed> Registry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.members.iter()
    }

    pub fn contains(&self, lookup: &str) -> bool {
        self.members.iter().any(|m| m.lookup() == lookup)
    }

    /// Insert a member; the alias must not already be in use.
    pub fn add_member(&mut self, member: M) -> Result<&M> {
        if self.contains(member.lookup()) {
            return Err(SprintError::DuplicateLookup(member.lookup().to_string()));
        }
        self.members.push(member);
        let idx = self.members.len() - 1;
        Ok(&self.members[idx])
    }

    pub fn member(&self, lookup: &str) -> Result<&M> {
        self.members
            .iter()
            .find(|m| m.lookup() == lookup)
            .ok_or_else(|| SprintError::LookupNotFound(lookup.to_string()))
    }

    /// Delete and return the member with the given alias.
    pub fn remove(&mut self, lookup: &str) -> Result<M> {
        let idx = self
            .members
            .iter()
            .position(|m| m.lookup() == lookup)
            .ok_or_else(|| SprintError::LookupNotFound(lookup.to_string()))?;
        Ok(self.members.remove(idx))
    }

    /// All known aliases, sorted.
    pub fn lookups(&self) -> BTreeSet<&str> {
        self.members.iter().map(|m| m.lookup()).collect()
    }
}

impl<M: Keyed + DeserializeOwned> Registry<M> {
    /// Load a registry from a YAML sequence file. An absent file, an empty
    /// file, and a null document all yield an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data =
            std::fs::read_to_string(path).map_err(|e| SprintError::decode(path, e))?;
        let members: Option<Vec<M>> =
            serde_yaml::from_str(&data).map_err(|e| SprintError::decode(path, e))?;

        let mut registry = Self::default();
        for member in members.unwrap_or_default() {
            registry.add_member(member)?;
        }
        Ok(registry)
    }
}

impl<M: Keyed + Serialize> Registry<M> {
    /// Write every member as a block record, full overwrite, preserving
    /// insertion order and declaration-order fields.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(&self.members)?;
        crate::io::atomic_write(path, data.as_bytes())
    }
}

impl Team {
    /// Resolve a lookup alias to a display name, falling back to the raw
    /// alias when unknown.
    pub fn name(&self, lookup: &str) -> String {
        match self.member(lookup) {
            Ok(m) => m.full_name(),
            Err(_) => lookup.to_string(),
        }
    }
}

impl<'a, M> IntoIterator for &'a Registry<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_registry() {
        let team = Team::new();
        assert_eq!(team.len(), 0);
        assert!(team.is_empty());
    }

    #[test]
    fn add_and_look_up_member() {
        let mut team = Team::new();
        team.add_member(TeamMember::new("TO", "Tjelvar", "Olsson"))
            .unwrap();
        assert_eq!(team.len(), 1);

        let member = team.member("TO").unwrap();
        assert_eq!(member.first_name, "Tjelvar");
        assert_eq!(member.last_name, "Olsson");
    }

    #[test]
    fn duplicate_lookup_rejected() {
        let mut team = Team::new();
        team.add_member(TeamMember::new("TO", "Tjelvar", "Olsson"))
            .unwrap();
        let err = team
            .add_member(TeamMember::new("TO", "Tim", "Olsson"))
            .unwrap_err();
        assert!(matches!(err, SprintError::DuplicateLookup(l) if l == "TO"));
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn member_not_found() {
        let team = Team::new();
        let err = team.member("XX").unwrap_err();
        assert!(matches!(err, SprintError::LookupNotFound(l) if l == "XX"));
    }

    #[test]
    fn remove_member() {
        let mut team = Team::new();
        team.add_member(TeamMember::new("TO", "Tjelvar", "Olsson"))
            .unwrap();
        let removed = team.remove("TO").unwrap();
        assert_eq!(removed.lookup, "TO");
        assert!(team.is_empty());

        assert!(matches!(
            team.remove("TO"),
            Err(SprintError::LookupNotFound(_))
        ));
    }

    #[test]
    fn lookups_are_sorted() {
        let mut team = Team::new();
        team.add_member(TeamMember::new("TO", "Tjelvar", "Olsson"))
            .unwrap();
        team.add_member(TeamMember::new("MH", "Matthew", "Hartley"))
            .unwrap();
        let lookups: Vec<&str> = team.lookups().into_iter().collect();
        assert_eq!(lookups, vec!["MH", "TO"]);
    }

    #[test]
    fn themes_registry() {
        let mut themes = Themes::new();
        themes
            .add_member(ThemeMember::new("img", "bioimage analysis"))
            .unwrap();
        assert_eq!(themes.member("img").unwrap().description, "bioimage analysis");
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.yml");
        std::fs::write(
            &path,
            "---\n- lookup: TO\n  first_name: Tjelvar\n  last_name: Olsson\n- lookup: MH\n  first_name: Matthew\n  last_name: Hartley\n",
        )
        .unwrap();

        let team = Team::load(&path).unwrap();
        assert_eq!(team.len(), 2);
        let lookups: Vec<&str> = team.lookups().into_iter().collect();
        assert_eq!(lookups, vec!["MH", "TO"]);
    }

    #[test]
    fn absent_file_yields_empty_registry() {
        let dir = TempDir::new().unwrap();
        let team = Team::load(&dir.path().join("no-such.yml")).unwrap();
        assert!(team.is_empty());
    }

    #[test]
    fn empty_file_yields_empty_registry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.yml");
        std::fs::write(&path, "").unwrap();
        assert!(Team::load(&path).unwrap().is_empty());

        std::fs::write(&path, "---\n").unwrap();
        assert!(Team::load(&path).unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.yml");
        std::fs::write(&path, "- lookup: [broken").unwrap();
        assert!(matches!(
            Team::load(&path),
            Err(SprintError::Decode { .. })
        ));
    }

    #[test]
    fn save_load_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("themes.yml");

        let mut themes = Themes::new();
        themes
            .add_member(ThemeMember::new("img", "bioimage analysis"))
            .unwrap();
        themes
            .add_member(ThemeMember::new("admin", "grants, appraisals, etc"))
            .unwrap();
        themes.save(&path).unwrap();

        let loaded = Themes::load(&path).unwrap();
        assert_eq!(loaded, themes);
        // Insertion order survives, not alphabetical order
        let first = loaded.iter().next().unwrap();
        assert_eq!(first.lookup, "img");
    }

    #[test]
    fn team_name_resolution() {
        let mut team = Team::new();
        team.add_member(TeamMember::new("TO", "Tjelvar", "Olsson"))
            .unwrap();
        assert_eq!(team.name("TO"), "Tjelvar Olsson");
        assert_eq!(team.name("XX"), "XX");
    }
}
