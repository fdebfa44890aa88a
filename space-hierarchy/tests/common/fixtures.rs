// SPDX-License-Identifier: GPL-3.0-only

use serde_json::json;
use space_types::HierarchyNode;

/// Food-themed building used across the hierarchy tests
pub fn food_hierarchy() -> Vec<HierarchyNode> {
    serde_json::from_value(json!([
        {
            "name": "Food",
            "id": 0,
            "spaceType": "building",
            "children": [
                {
                    "name": "Pickled things",
                    "id": 1,
                    "spaceType": "floor",
                    "children": [
                        {"name": "Pickles", "id": 2, "spaceType": "space"},
                        {"name": "Sauerkraut", "id": 3, "spaceType": "space"},
                        {"name": "Relish", "id": 4, "spaceType": "space"},
                    ],
                },
                {
                    "name": "Fruits",
                    "id": 5,
                    "spaceType": "floor",
                    "children": [
                        {
                            "name": "Apples",
                            "id": 6,
                            "spaceType": "space",
                            "children": [
                                {"name": "Macintosh", "id": 7, "spaceType": "space"},
                                {"name": "Granny Smith", "id": 8, "spaceType": "space"},
                                {"name": "Gala", "id": 9, "spaceType": "space"},
                            ],
                        },
                        {"name": "Bananas", "id": 10, "spaceType": "space"},
                        {"name": "Peaches", "id": 11, "spaceType": "space"},
                    ],
                },
                {"name": "Calamari", "id": 12, "spaceType": "floor"},
            ],
        },
    ]))
    .expect("food hierarchy fixture deserializes")
}

/// Two campuses with uneven depth, for structural checks
pub fn campus_forest() -> Vec<HierarchyNode> {
    serde_json::from_value(json!([
        {
            "id": "cmp_east", "name": "East Campus", "spaceType": "campus",
            "children": [
                {
                    "id": "bld_a", "name": "Annex", "spaceType": "building",
                    "children": [
                        {"id": "flr_a1", "name": "Annex 1", "spaceType": "floor", "children": []},
                        {
                            "id": "flr_a2", "name": "Annex 2", "spaceType": "floor",
                            "children": [
                                {"id": "spc_lab", "name": "Lab", "spaceType": "space"},
                                {"id": "spc_cafe", "name": "Cafe", "spaceType": "space"},
                            ],
                        },
                    ],
                },
                {"id": "bld_b", "name": "Boathouse", "spaceType": "building"},
            ],
        },
        {"id": "cmp_west", "name": "West Campus", "spaceType": "campus"},
        {"id": "spc_kiosk", "name": "Kiosk", "spaceType": "space", "hasPurview": false},
    ]))
    .expect("campus forest fixture deserializes")
}
