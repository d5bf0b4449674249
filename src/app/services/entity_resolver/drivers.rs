//! Driver lookup by the free-text names used in results and team rosters

use crate::app::models::Driver;

/// Lookup over a driver list.
///
/// A name is tried against usernames first, then ids, short display names
/// and discord handles, all case-insensitively. Each field is searched across
/// every driver before moving to the next field, so a username match always
/// beats an id match elsewhere in the list.
#[derive(Debug, Clone, Copy)]
pub struct DriverIndex<'a> {
    drivers: &'a [Driver],
}

impl<'a> DriverIndex<'a> {
    pub fn new(drivers: &'a [Driver]) -> Self {
        Self { drivers }
    }

    /// Position of the driver a name refers to
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let fields: [fn(&Driver) -> &str; 4] = [
            |driver| driver.username.as_str(),
            |driver| driver.id.as_str(),
            |driver| driver.short_display.as_str(),
            |driver| driver.discord.as_str(),
        ];
        fields.iter().find_map(|field| {
            self.drivers.iter().position(|driver| {
                let value = field(driver).trim();
                !value.is_empty() && value.eq_ignore_ascii_case(name)
            })
        })
    }

    pub fn resolve(&self, name: &str) -> Option<&'a Driver> {
        self.position(name).map(|index| &self.drivers[index])
    }
}
