//! Built-in per-title compatibility hacks
//!
//! Some titles only run correctly with specific core hacks switched on or
//! off. These are the defaults the core applies for them; user overrides
//! in the title's settings file always take precedence.

use super::{SectionName, Setting};
use crate::program_id::ProgramId;

/// A compatibility hack and the titles it applies to
struct Hack {
    section: SectionName,
    key: &'static str,
    value: bool,
    titles: &'static [u64],
}

const fn hack(section: SectionName, key: &'static str, value: bool, titles: &'static [u64]) -> Hack {
    Hack {
        section,
        key,
        value,
        titles,
    }
}

const TALES_OF_THE_ABYSS: &[u64] = &[
    0x0004000000068B00,
    0x0004000000061300,
    0x000400000004A700,
    0x000400000005D700,
];

const DOWNCOUNT_TITLES: &[u64] = &[
    0x00040000001CCD00, // The Alliance Alive
    0x00040000001B4500,
    0x0004000000120900, // Lord of Magna: Maiden Heaven
    0x0004000000164300,
    0x000400000008FE00, // 1001 Spikes
    0x000400000007C700, // Mario Tennis Open
    0x000400000007C800,
    0x0004000000064D00,
    0x00040000000B9100,
    0x00040000000DCD00, // Mario Golf: World Tour
    0x00040000000A5300,
    0x00040000000DCE00,
];

const SLOW_DRAW_TITLES: &[u64] = &[
    0x0004000000068B00, // Tales of the Abyss / Pac Man Party 3D
    0x0004000000061300,
    0x000400000004A700,
    0x000400000005D700,
    0x000400000015CB00, // New Atelier Rorona
    0x000400000018E900, // My Hero Academia
    0x000400000016AD00, // Dragon Quest Monsters Joker 3
    0x00040000001ACB00, // Dragon Quest Monsters Joker 3 Professional
];

const TEXTURE_LOAD_OFF: &[u64] = &[
    0x0004000000068B00,
    0x0004000000061300,
    0x000400000004A700,
    0x000400000005D700,
    0x00040000000D2800, // Rune Factory 4
    0x0004000000065800,
    0x0004000000766600,
    0x0004000000055D00, // Pokémon X/Y
    0x0004000000055E00,
];

const TEXTURE_LOAD_ON: &[u64] = &[
    0x000400000004B500, // Monster Hunter 4
    0x0004000000126300, // Monster Hunter 4 Ultimate
    0x000400000011D700,
    0x0004000000126100,
    0x0004000000153200,
    0x0004000000155400, // Monster Hunter X
];

const CLIP_COEF_TITLES: &[u64] = &[
    0x0004000000049100, // Star Fox 64
    0x0004000000030400,
    0x0004000000049000,
    0x0004000000187E00, // Picross 2
    0x0004000000169A00,
];

const Y2R_PERFORM_TITLES: &[u64] = &[
    0x00040000000DCA00, // Danball Senki W Chou Custom
    0x00040000000F4000, // Danball Senki WARS
];

const TEXTURE_COPY_TITLES: &[u64] = &[
    0x000400000008B400, // Mario Kart 7
    0x0004000000030600,
    0x0004000000030800,
    0x0004000000030700,
];

const LINEAR_FILTER_TITLES: &[u64] = &[
    0x00040000001AA200, // Attack On Titan 2
    0x0004000000134500, // Attack On Titan 1 CHAIN
    0x0004000000152000,
    0x00040000000DF800, // Attack On Titan 1
];

const Y2R_DELAY_TITLES: &[u64] = &[
    0x0004000000044700, // FIFA 12
    0x0004000000047A00,
    0x0004000000044800,
    0x00040000000A2B00, // FIFA 13
    0x00040000000A2900,
    0x00040000000A3000,
    0x00040000000E7900, // FIFA 14
    0x00040000000DEA00,
    0x00040000000E7A00,
    0x000400000013C700, // FIFA 15
    0x000400000013CA00,
    0x000400000013CB00,
];

const ACCURATE_MUL_TITLES: &[u64] = &[
    0x0004000000134500, // Attack on Titan
    0x00040000000DF800,
    0x0004000000152000,
    0x00040000001AA200,
    0x0004000000054000, // Super Mario 3D Land
    0x0004000000053F00,
    0x0004000000054100,
    0x0004000000089F00,
    0x0004000000089E00,
    0x0004000000033400, // The Legend of Zelda: Ocarina of Time 3D
    0x0004000000033500,
    0x0004000000033600,
    0x000400000008F800,
    0x000400000008F900,
    0x0004000000132700, // Mario & Luigi: Paper Jam
    0x0004000000132600,
    0x0004000000132800,
    0x00040000001D1400, // Mario & Luigi: Bowser's Inside Story
    0x00040000001D1500,
    0x00040000001CA900,
    0x00040000001B8F00, // Mario & Luigi: Superstar Saga
    0x00040000001B9000,
    0x0004000000194B00,
    0x00040000001CB000, // Captain Toad: Treasure Tracker
    0x00040000001CB200,
    0x00040000001CB100,
    0x00040000000EC200, // The Legend of Zelda: A Link Between Worlds
    0x00040000000EC300,
    0x00040000000EC400,
    0x000400000007AD00, // New Super Mario Bros. 2
    0x00040000000B8A00,
    0x000400000007AE00,
    0x000400000007AF00,
    0x0004000000079600, // Jett Rocket II
    0x0004000000112600, // Cut the Rope
    0x0004000000116700,
    0x00040000000D0000, // Luigi's Mansion: Dark Moon
    0x0004000000076400,
    0x0004000000055F00,
    0x0004000000076500,
    0x00040000000AFC00, // Digimon World Re:Digitize Decode
    0x0004000000125600, // The Legend of Zelda: Majora's Mask 3D
    0x0004000000125500,
    0x00040000000D6E00,
    0x0004000000154700, // Lego City Undercover
    0x00040000000AD600,
    0x00040000000AD500,
    0x00040000001D1800, // Luigi's Mansion
    0x00040000001D1A00,
    0x00040000001D1900,
];

const NEW_3DS_TITLES: &[u64] = &[
    0x000400000F700000, // Xenoblade Chronicles 3D
    0x000400000F700100,
    0x000400000F700200,
    0x000400000F70CC00, // Fire Emblem Warriors
    0x000400000F70CD00,
    0x000400000F70C100,
    0x000400000F700800, // The Binding of Isaac: Rebirth
    0x000400000F701700,
    0x000400000F700900,
    0x00040000000CCE00, // Donkey Kong Country Returns 3D
    0x00040000000CC000,
    0x00040000000CCF00,
    0x0004000000127500, // Sonic Boom: Shattered Crystal
    0x000400000014AE00,
    0x000400000012C200,
    0x0004000000161300, // Sonic Boom: Fire & Ice
    0x0004000000170700,
    0x0004000000164700,
    0x00040000000B3500, // Sonic & All-Stars Racing Transformed
    0x000400000008FC00,
    0x00040000001B8700, // Minecraft
    0x000400000F707F00, // Hyperlight EX
    0x000400000008FE00, // 1001 Spikes
    0x000400000007C700, // Mario Tennis Open
    0x000400000007C800,
    0x0004000000064D00,
    0x00040000000B9100,
    0x00040000000DCD00, // Mario Golf: World Tour
    0x00040000000A5300,
    0x00040000000DCE00,
];

const HACKS: &[Hack] = &[
    hack(SectionName::Renderer, "display_transfer_hack", true, TALES_OF_THE_ABYSS),
    hack(SectionName::Renderer, "skip_slow_draw", true, SLOW_DRAW_TITLES),
    hack(SectionName::Renderer, "texture_load_hack", false, TEXTURE_LOAD_OFF),
    hack(SectionName::Renderer, "texture_load_hack", true, TEXTURE_LOAD_ON),
    hack(SectionName::Core, "core_downcount_hack", true, DOWNCOUNT_TITLES),
    hack(SectionName::Renderer, "disable_clip_coef", true, CLIP_COEF_TITLES),
    hack(SectionName::Core, "y2r_perform_hack", true, Y2R_PERFORM_TITLES),
    hack(SectionName::Renderer, "skip_texture_copy", true, TEXTURE_COPY_TITLES),
    hack(SectionName::Renderer, "use_linear_filter", true, LINEAR_FILTER_TITLES),
    hack(SectionName::Core, "y2r_event_delay", true, Y2R_DELAY_TITLES),
    hack(SectionName::Renderer, "shaders_accurate_mul", true, ACCURATE_MUL_TITLES),
    hack(SectionName::System, "is_new_3ds", true, NEW_3DS_TITLES),
];

/// Compatibility hacks for a title, empty for titles without any
pub fn builtin_overrides(id: ProgramId) -> Vec<Setting> {
    HACKS
        .iter()
        .filter(|hack| hack.titles.contains(&id.raw()))
        .map(|hack| Setting::new(hack.section.clone(), hack.key, hack.value))
        .collect()
}
