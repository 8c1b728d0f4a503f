//! Static catalog of fictional haunted locations.

use serde::{Deserialize, Serialize};

/// One catalog entry, served verbatim by the map endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HauntedLocation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

const CATALOG: &[(&str, &str, f64, f64, &str)] = &[
    ("1", "The Whispering Woods", 40.7128, -74.0060, "Ancient forest where voices echo through the mist"),
    ("2", "Abandoned Asylum", 34.0522, -118.2437, "Halls of forgotten souls and endless screams"),
    ("3", "Cursed Cemetery", 41.8781, -87.6298, "Where the dead never rest in peace"),
    ("4", "Phantom Lighthouse", 37.7749, -122.4194, "Beacon for lost spirits at sea"),
    ("5", "Haunted Manor", 51.5074, -0.1278, "Victorian mansion of dark mysteries"),
    ("6", "Shadow Bridge", 48.8566, 2.3522, "Crossing between the living and dead"),
    ("7", "Witch's Hollow", 35.6762, 139.6503, "Ancient ritual grounds of dark magic"),
    ("8", "Ghost Ship Bay", -33.8688, 151.2093, "Where phantom vessels eternally dock"),
    ("9", "Spectral Cathedral", 55.7558, 37.6173, "Sacred haunted sanctuary of lost prayers"),
    ("10", "Cursed Mine", 39.7392, -104.9903, "Depths of eternal darkness and despair"),
    ("11", "Phantom Opera House", 40.7580, -73.9855, "Where ghostly performances never end"),
    ("12", "Bleeding Castle", 55.9533, -3.1883, "Walls that weep crimson tears"),
    ("13", "Screaming Tunnels", 43.0896, -79.0849, "Underground passages of eternal agony"),
    ("14", "Doll Island", 19.2900, -99.0950, "Thousands of possessed dolls watching"),
    ("15", "Suicide Forest", 35.4697, 138.6380, "Where lost souls wander forever"),
    ("16", "Plague Village", 53.2500, -1.6167, "Abandoned town of the infected dead"),
    ("17", "Vampire Castle", 45.5144, 25.3675, "Home of the immortal bloodthirsty"),
    ("18", "Banshee Cliffs", 53.3498, -6.2603, "Where death omens wail at night"),
    ("19", "Voodoo Swamp", 29.9511, -90.0715, "Cursed wetlands of dark rituals"),
    ("20", "Poltergeist Prison", 37.8267, -122.4233, "Cells that trap spirits forever"),
    ("21", "Demon's Gate", 41.9028, 12.4964, "Portal to the underworld itself"),
    ("22", "Wraith Monastery", 27.1751, 78.0421, "Temple of restless monk spirits"),
    ("23", "Zombie Plantation", 18.5944, -72.3074, "Fields where the dead still toil"),
    ("24", "Headless Horseman Bridge", 41.0534, -73.8642, "Where the rider claims new heads"),
    ("25", "Siren's Cove", 37.9838, 23.7275, "Beach where sailors meet their doom"),
    ("26", "Wendigo Woods", 46.8139, -71.2080, "Forest of the cannibalistic spirit"),
    ("27", "Mummy's Tomb", 29.9792, 31.1342, "Ancient burial site of cursed pharaohs"),
    ("28", "Kraken's Deep", 59.9139, 10.7522, "Waters where the beast lurks below"),
    ("29", "Chupacabra Ranch", 25.6866, -100.3161, "Where livestock mysteriously perish"),
    ("30", "Mothman Bridge", 38.4192, -82.4452, "Crossing guarded by winged terror"),
    ("31", "Skinwalker Ranch", 40.2586, -109.8909, "Shapeshifting entities roam the desert"),
    ("32", "Black Eyed Children Corner", 32.7555, -97.3308, "Where soulless children knock at night"),
    ("33", "Shadow People Alley", 34.0522, -118.2437, "Dark figures lurk in peripheral vision"),
    ("34", "Goatman's Bridge", 33.1106, -97.1350, "Half-man, half-beast guards the crossing"),
    ("35", "Jersey Devil Pines", 39.9259, -74.5746, "Winged demon haunts the barrens"),
    ("36", "Slender Man Forest", 43.0389, -87.9065, "Tall faceless figure stalks the woods"),
    ("37", "Bloody Mary Mirror", 41.8781, -87.6298, "Reflections show your darkest fate"),
    ("38", "Crying Boy Orphanage", 53.4808, -2.2426, "Cursed paintings bring fire and death"),
    ("39", "Dybbuk Box Warehouse", 45.5152, -122.6784, "Possessed wine cabinet of nightmares"),
    ("40", "Annabelle's Attic", 41.4115, -73.2742, "Demonic doll watches from the shadows"),
    ("41", "Robert the Doll Museum", 24.5551, -81.7800, "Cursed toy that moves on its own"),
    ("42", "Myrtles Plantation", 30.7833, -91.2167, "Most haunted home in America"),
    ("43", "Winchester Mystery House", 37.3184, -121.9511, "Maze built to confuse spirits"),
    ("44", "Poveglia Island", 45.3958, 12.3264, "Plague island of tortured souls"),
    ("45", "Hoia Baciu Forest", 46.7712, 23.5894, "Bermuda Triangle of Transylvania"),
    ("46", "Aokigahara Sea of Trees", 35.4697, 138.6380, "Forest where compasses fail"),
    ("47", "Catacombs of Paris", 48.8338, 2.3324, "Six million skeletons line the walls"),
    ("48", "Bhangarh Fort", 27.0974, 76.2708, "Cursed city forbidden after dark"),
    ("49", "Island of the Dolls", 19.2900, -99.0950, "Mutilated dolls hang from every tree"),
    ("50", "Leap Castle", 53.0833, -7.7167, "Elemental demon guards the oubliette"),
];

/// Every catalog entry, in id order.
pub fn all() -> Vec<HauntedLocation> {
    CATALOG
        .iter()
        .map(|&(id, name, lat, lng, description)| HauntedLocation {
            id: id.to_owned(),
            name: name.to_owned(),
            lat,
            lng,
            description: description.to_owned(),
        })
        .collect()
}

/// Look a location up by its id.
pub fn find(id: &str) -> Option<HauntedLocation> {
    CATALOG
        .iter()
        .find(|&&(entry_id, ..)| entry_id == id)
        .map(|&(entry_id, name, lat, lng, description)| HauntedLocation {
            id: entry_id.to_owned(),
            name: name.to_owned(),
            lat,
            lng,
            description: description.to_owned(),
        })
}
