// Sample projects shared by the unit tests

use crate::entities::Project;

pub fn mini_museum() -> Project {
    Project::new(845, "Mini Museum", "art", 38000.0, 1226811.0, 5030)
}

pub fn bee_and_puppycat() -> Project {
    Project::new(550, "Bee and PuppyCat: The Series", "film", 600000.0, 872133.0, 18209)
}

pub fn double_fine_adventure() -> Project {
    Project::new(910, "Double Fine Adventure", "games", 400000.0, 3336371.0, 87142)
}

pub fn kung_fury() -> Project {
    Project::new(668, "Kung Fury", "film", 200000.0, 630019.0, 17713)
}

pub fn meow_wolf() -> Project {
    Project::new(
        199,
        "Meow Wolf Art Complex ft. The House of Eternal Return",
        "art",
        100000.0,
        105221.0,
        880,
    )
}

pub fn obvious_child() -> Project {
    Project::new(49, "OBVIOUS CHILD", "film", 35000.0, 37214.0, 631)
}

pub fn of_montreal() -> Project {
    Project::new(
        613,
        "of Montreal \"Song Dynasties\" Feature-Length Documentary",
        "music",
        75000.0,
        94844.0,
        1124,
    )
}

pub fn skull_graphic_tee() -> Project {
    Project::new(999, "SKULL GRAPHIC TEE", "fashion", 100.0, 125.0, 5)
}

pub fn the_burning_wheel_codex() -> Project {
    Project::new(381, "The Burning Wheel Codex", "games", 25000.0, 108362.0, 2109)
}

pub fn all_projects() -> Vec<Project> {
    vec![
        bee_and_puppycat(),
        double_fine_adventure(),
        kung_fury(),
        meow_wolf(),
        mini_museum(),
        obvious_child(),
        of_montreal(),
        skull_graphic_tee(),
        the_burning_wheel_codex(),
    ]
}
