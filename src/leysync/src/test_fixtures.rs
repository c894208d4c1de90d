//! HoYoLAB response snippets shared by the unit tests

use serde_json::{json, Value};

/// Wrap character records in a successful response envelope
pub fn envelope(list: Vec<Value>) -> Value {
    json!({
        "retcode": 0,
        "message": "OK",
        "data": {
            "uid": "800000001",
            "server": "os_asia",
            "list": list
        }
    })
}

/// Minimal complete character: weapon, one flower, three talents, no constellations
pub fn basic_record(id: u64, name: &str, element: &str, level: u32) -> Value {
    json!({
        "base": {
            "id": id,
            "name": name,
            "icon": "https://example.invalid/icon.png",
            "element": element,
            "fetter": 4,
            "level": level,
            "actived_constellation_num": 0
        },
        "weapon": {
            "id": 11101,
            "name": "Dull Blade",
            "icon": "https://example.invalid/weapon.png",
            "level": 1,
            "promote_level": 0,
            "affix_level": 1
        },
        "relics": [{
            "id": 81101,
            "set": { "id": 15001, "name": "Adventurer" },
            "pos": 1,
            "rarity": 3,
            "level": 0,
            "main_property": { "property_type": 2, "value": "430" },
            "sub_property_list": [
                { "property_type": 5, "value": "11", "times": 0 }
            ]
        }],
        "constellations": [],
        "skills": [
            { "skill_id": 1, "name": "Normal Attack", "is_unlock": true, "level": 1, "desc": "" },
            { "skill_id": 2, "name": "Elemental Skill", "is_unlock": true, "level": 1, "desc": "" },
            { "skill_id": 3, "name": "Elemental Burst", "is_unlock": true, "level": 1, "desc": "" }
        ]
    })
}

/// C3 Ayaka: burst boosted by C3, alternate sprint listed third
pub fn ayaka_record() -> Value {
    json!({
        "base": {
            "id": 10000002,
            "name": "Kamisato Ayaka",
            "icon": "https://example.invalid/ayaka.png",
            "side_icon": "https://example.invalid/ayaka_side.png",
            "image": "https://example.invalid/ayaka_full.png",
            "element": "Cryo",
            "fetter": 10,
            "level": 90,
            "actived_constellation_num": 3
        },
        "weapon": {
            "id": 11509,
            "name": "Mistsplitter Reforged",
            "icon": "https://example.invalid/mistsplitter.png",
            "level": 90,
            "promote_level": 6,
            "affix_level": 1
        },
        "relics": [
            {
                "id": 71514,
                "set": { "id": 15014, "name": "Blizzard Strayer" },
                "icon": "https://example.invalid/flower.png",
                "pos": 1,
                "rarity": 5,
                "level": 20,
                "main_property": { "property_type": 2, "value": "4780" },
                "sub_property_list": [
                    { "property_type": 22, "value": "21.8%", "times": 2 },
                    { "property_type": 20, "value": "3.9%", "times": 0 },
                    { "property_type": 6, "value": "5.8%", "times": 0 },
                    { "property_type": 23, "value": "6.5%", "times": 1 }
                ]
            },
            {
                "id": 71524,
                "set": { "id": 15014, "name": "Blizzard Strayer" },
                "pos": 2,
                "rarity": 5,
                "level": 20,
                "main_property": { "property_type": 5, "value": "311" },
                "sub_property_list": [
                    { "property_type": 20, "value": "10.5%", "times": 3 },
                    { "property_type": 2, "value": "508", "times": 1 }
                ]
            }
        ],
        "constellations": [
            { "id": 201, "pos": 1, "is_actived": true, "is_enhanced": false,
              "effect": "Cryo DMG from Normal and Charged Attacks has a chance to decrease CD." },
            { "id": 202, "pos": 2, "is_actived": true, "is_enhanced": false,
              "effect": "Unleashes two smaller additional Frostflake Seki no To." },
            { "id": 203, "pos": 3, "is_actived": true, "is_enhanced": false,
              "effect": "Increases the Level of Kamisato Art: Soumetsu by 3. Maximum upgrade level is 15." },
            { "id": 204, "pos": 4, "is_actived": false, "is_enhanced": false,
              "effect": "Opponents' DEF is decreased by 30% for 6s." },
            { "id": 205, "pos": 5, "is_actived": false, "is_enhanced": false,
              "effect": "Increases the Level of Kamisato Art: Hyouka by 3. Maximum upgrade level is 15." },
            { "id": 206, "pos": 6, "is_actived": false, "is_enhanced": false,
              "effect": "Charged Attacks deal increased CRIT DMG." }
        ],
        "costumes": [
            { "id": 200201, "name": "Springbloom Missive", "icon": "https://example.invalid/costume.png" }
        ],
        "skills": [
            { "skill_id": 10024, "name": "Normal Attack: Kamisato Art - Kabuki",
              "is_unlock": true, "is_enhanced": false, "level": 10,
              "desc": "Perform up to 5 rapid strikes." },
            { "skill_id": 10018, "name": "Kamisato Art: Hyouka",
              "is_unlock": true, "is_enhanced": false, "level": 9,
              "desc": "Summons blooming ice to launch nearby opponents." },
            { "skill_id": 10013, "name": "Kamisato Art: Senho",
              "is_unlock": true, "is_enhanced": false, "level": 1,
              "desc": "<color=#FFD780FF>Alternate Sprint</color>\nKamisato Ayaka consumes Stamina and cloaks herself in a frozen fog." },
            { "skill_id": 10019, "name": "Kamisato Art: Soumetsu",
              "is_unlock": true, "is_enhanced": false, "level": 13,
              "desc": "Summons forth a snowstorm with flawless poise." }
        ]
    })
}

/// C0 Raiden at level 80 with a single circlet
pub fn raiden_record() -> Value {
    json!({
        "base": {
            "id": 10000052,
            "name": "Raiden Shogun",
            "element": "Electro",
            "fetter": 8,
            "level": 80,
            "actived_constellation_num": 0
        },
        "weapon": {
            "id": 13415,
            "name": "\"The Catch\"",
            "level": 80,
            "promote_level": 5,
            "affix_level": 5
        },
        "relics": [{
            "id": 73535,
            "set": { "id": 15020, "name": "Emblem of Severed Fate" },
            "pos": 5,
            "rarity": 5,
            "level": 16,
            "main_property": { "property_type": 22, "value": "53.0%" },
            "sub_property_list": [
                { "property_type": 20, "value": "7.0%", "times": 1 },
                { "property_type": 23, "value": "11.0%", "times": 1 },
                { "property_type": 28, "value": "19", "times": 0 }
            ]
        }],
        "constellations": [
            { "id": 1501, "pos": 3, "is_actived": false, "is_enhanced": false,
              "effect": "Increases the Level of Secret Art: Musou Shinsetsu by 3." }
        ],
        "skills": [
            { "skill_id": 10521, "name": "Normal Attack: Origin", "is_unlock": true, "level": 6 },
            { "skill_id": 10522, "name": "Transcendence: Baleful Omen", "is_unlock": true, "level": 9 },
            { "skill_id": 10525, "name": "Secret Art: Musou Shinsetsu", "is_unlock": true, "level": 10 }
        ]
    })
}
