//! Static word to palette dictionary
//!
//! Each world-building word maps to exactly four colors. Lookups are
//! case-insensitive and fall back to the "grass" entry on a miss.

use crate::color::palette::{Color, Palette};
use crate::io::configuration::DEFAULT_WORD;
use std::collections::HashMap;
use std::sync::LazyLock;

const fn c(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

/// Every dictionary entry as (lowercase word, four colors)
pub const ENTRIES: &[(&str, [Color; 4])] = &[
    ("grass", [c(34, 139, 34), c(50, 205, 50), c(0, 128, 0), c(124, 252, 0)]),
    ("rock", [c(112, 128, 144), c(119, 136, 153), c(105, 105, 105), c(128, 128, 128)]),
    ("ocean", [c(0, 105, 148), c(0, 128, 255), c(28, 107, 160), c(25, 25, 112)]),
    ("desert", [c(237, 201, 175), c(210, 180, 140), c(244, 164, 96), c(222, 184, 135)]),
    ("forest", [c(34, 139, 34), c(0, 100, 0), c(27, 94, 32), c(46, 139, 87)]),
    ("mountain", [c(139, 137, 137), c(205, 201, 201), c(169, 169, 169), c(188, 184, 177)]),
    ("hills", [c(85, 107, 47), c(107, 142, 35), c(143, 188, 143), c(154, 205, 50)]),
    ("stone", [c(120, 120, 120), c(140, 140, 140), c(110, 110, 110), c(90, 90, 90)]),
    ("gravel", [c(128, 128, 128), c(153, 153, 153), c(102, 102, 102), c(77, 77, 77)]),
    ("mud", [c(70, 50, 30), c(60, 40, 20), c(80, 60, 40), c(100, 80, 60)]),
    ("snow", [c(255, 250, 250), c(240, 248, 255), c(245, 245, 245), c(230, 230, 230)]),
    ("ice", [c(176, 224, 230), c(173, 216, 230), c(224, 255, 255), c(240, 255, 255)]),
    ("glass", [c(180, 180, 255), c(200, 200, 255), c(220, 220, 255), c(240, 240, 255)]),
    ("lava", [c(255, 69, 0), c(255, 140, 0), c(255, 0, 0), c(139, 0, 0)]),
    ("sand", [c(194, 178, 128), c(238, 214, 175), c(244, 164, 96), c(210, 180, 140)]),
    ("cliff", [c(139, 137, 137), c(160, 160, 160), c(190, 190, 190), c(211, 211, 211)]),
    ("snowy", [c(248, 248, 255), c(240, 255, 255), c(245, 245, 245), c(230, 230, 230)]),
    ("volcano", [c(139, 0, 0), c(205, 38, 38), c(255, 69, 0), c(105, 105, 105)]),
    ("river", [c(0, 191, 255), c(30, 144, 255), c(70, 130, 180), c(25, 25, 112)]),
    ("riverbank", [c(34, 139, 34), c(50, 205, 50), c(139, 69, 19), c(210, 180, 140)]),
    ("basalt", [c(70, 70, 70), c(90, 90, 90), c(50, 50, 50), c(30, 30, 30)]),
    ("marble", [c(220, 220, 220), c(255, 250, 250), c(245, 245, 245), c(230, 230, 230)]),
    ("metal", [c(192, 192, 192), c(169, 169, 169), c(128, 128, 128), c(255, 215, 0)]),
    ("iron", [c(188, 188, 188), c(183, 183, 183), c(160, 160, 160), c(130, 130, 130)]),
    ("gold", [c(255, 215, 0), c(238, 201, 0), c(218, 165, 32), c(184, 134, 11)]),
    ("silver", [c(192, 192, 192), c(211, 211, 211), c(169, 169, 169), c(128, 128, 128)]),
    ("lapis", [c(38, 97, 156), c(25, 25, 112), c(0, 0, 139), c(0, 0, 205)]),
    ("emerald", [c(0, 201, 87), c(0, 139, 69), c(0, 255, 127), c(46, 139, 87)]),
    ("diamond", [c(185, 242, 255), c(224, 255, 255), c(175, 238, 238), c(176, 224, 230)]),
    ("obsidian", [c(53, 56, 57), c(35, 38, 39), c(27, 29, 30), c(70, 70, 90)]),
    ("netherrack", [c(96, 35, 35), c(125, 45, 45), c(74, 22, 22), c(50, 10, 10)]),
    ("endstone", [c(218, 210, 158), c(232, 224, 174), c(211, 203, 146), c(190, 182, 122)]),
    ("pebble", [c(139, 137, 137), c(160, 160, 160), c(120, 120, 120), c(105, 105, 105)]),
    ("coral", [c(255, 127, 80), c(255, 160, 122), c(240, 128, 128), c(233, 150, 122)]),
    ("sponge", [c(255, 255, 128), c(255, 255, 153), c(240, 230, 140), c(238, 232, 170)]),
    ("kelp", [c(34, 139, 34), c(0, 128, 0), c(85, 107, 47), c(46, 139, 87)]),
    ("seaweed", [c(46, 139, 87), c(0, 100, 0), c(0, 128, 0), c(60, 179, 113)]),
    ("fossil", [c(210, 180, 140), c(205, 133, 63), c(222, 184, 135), c(139, 69, 19)]),
    ("boulder", [c(128, 128, 128), c(105, 105, 105), c(119, 136, 153), c(112, 128, 144)]),
    ("slate", [c(112, 128, 144), c(47, 79, 79), c(69, 90, 100), c(70, 70, 70)]),
    ("clay", [c(221, 221, 221), c(205, 201, 201), c(196, 196, 196), c(169, 169, 169)]),
    ("terra", [c(139, 69, 19), c(160, 82, 45), c(210, 105, 30), c(188, 143, 143)]),
    ("cobblestone", [c(120, 120, 120), c(90, 90, 90), c(100, 100, 100), c(130, 130, 130)]),
    ("brick", [c(178, 34, 34), c(165, 42, 42), c(139, 0, 0), c(150, 40, 40)]),
    ("roof", [c(139, 69, 19), c(105, 105, 105), c(165, 42, 42), c(128, 128, 128)]),
    ("wood", [c(139, 69, 19), c(160, 82, 45), c(205, 133, 63), c(222, 184, 135)]),
    ("plank", [c(181, 101, 29), c(210, 105, 30), c(153, 76, 0), c(139, 69, 19)]),
    ("tree", [c(34, 139, 34), c(0, 128, 0), c(139, 69, 19), c(160, 82, 45)]),
    ("leaves", [c(0, 100, 0), c(34, 139, 34), c(50, 205, 50), c(107, 142, 35)]),
    ("cactus", [c(0, 100, 0), c(34, 139, 34), c(60, 179, 113), c(107, 142, 35)]),
    ("mushroom", [c(139, 69, 19), c(222, 184, 135), c(255, 0, 0), c(240, 230, 140)]),
    ("fire", [c(255, 0, 0), c(255, 69, 0), c(255, 140, 0), c(255, 215, 0)]),
    ("magma", [c(255, 69, 0), c(255, 140, 0), c(220, 20, 60), c(178, 34, 34)]),
    ("acid", [c(173, 255, 47), c(127, 255, 0), c(202, 255, 112), c(143, 188, 143)]),
    ("poison", [c(127, 255, 0), c(110, 139, 61), c(50, 205, 50), c(154, 205, 50)]),
    ("toxic", [c(0, 255, 127), c(46, 139, 87), c(173, 255, 47), c(127, 255, 0)]),
    ("radioactive", [c(0, 250, 154), c(0, 255, 127), c(127, 255, 0), c(189, 183, 107)]),
    ("plague", [c(128, 0, 0), c(139, 0, 0), c(165, 42, 42), c(178, 34, 34)]),
    ("light", [c(255, 255, 224), c(255, 255, 240), c(250, 250, 210), c(255, 250, 205)]),
    ("dark", [c(25, 25, 25), c(50, 50, 50), c(75, 75, 75), c(0, 0, 0)]),
    ("shadow", [c(40, 40, 40), c(60, 60, 60), c(80, 80, 80), c(0, 0, 0)]),
    ("portal", [c(138, 43, 226), c(75, 0, 130), c(148, 0, 211), c(153, 50, 204)]),
    ("magic", [c(186, 85, 211), c(218, 112, 214), c(147, 112, 219), c(138, 43, 226)]),
    ("arcane", [c(72, 61, 139), c(106, 90, 205), c(123, 104, 238), c(147, 112, 219)]),
    ("rune", [c(225, 225, 255), c(200, 200, 255), c(175, 175, 230), c(150, 150, 205)]),
    ("glyph", [c(255, 228, 225), c(255, 240, 245), c(238, 221, 130), c(218, 112, 214)]),
    ("enchanted", [c(128, 0, 128), c(186, 85, 211), c(216, 191, 216), c(199, 21, 133)]),
    ("fairy", [c(255, 182, 193), c(255, 192, 203), c(255, 228, 225), c(255, 240, 245)]),
    ("pixie", [c(255, 228, 225), c(255, 182, 193), c(255, 105, 180), c(255, 20, 147)]),
    ("sprite", [c(173, 216, 230), c(135, 206, 250), c(135, 206, 235), c(176, 196, 222)]),
    ("spirit", [c(211, 211, 255), c(170, 170, 255), c(192, 192, 192), c(224, 255, 255)]),
    ("ghost", [c(245, 245, 245), c(230, 230, 230), c(211, 211, 211), c(192, 192, 192)]),
    ("grave", [c(60, 60, 60), c(45, 45, 45), c(30, 30, 30), c(90, 90, 90)]),
    ("tomb", [c(70, 70, 70), c(100, 100, 100), c(130, 130, 130), c(153, 153, 153)]),
    ("crypt", [c(50, 50, 50), c(70, 70, 70), c(90, 90, 90), c(100, 100, 100)]),
    ("bone", [c(245, 245, 220), c(255, 228, 196), c(255, 239, 213), c(240, 230, 140)]),
    ("skull", [c(215, 215, 215), c(192, 192, 192), c(169, 169, 169), c(245, 245, 245)]),
    ("flesh", [c(255, 160, 122), c(255, 127, 80), c(255, 99, 71), c(250, 128, 114)]),
    ("blood", [c(139, 0, 0), c(178, 34, 34), c(220, 20, 60), c(255, 0, 0)]),
    ("carrion", [c(128, 0, 0), c(139, 0, 0), c(165, 42, 42), c(178, 34, 34)]),
    ("sandstone", [c(216, 179, 140), c(237, 201, 175), c(255, 228, 196), c(210, 180, 140)]),
    ("limestone", [c(230, 230, 220), c(224, 224, 214), c(211, 211, 185), c(200, 200, 175)]),
    ("granite", [c(143, 143, 143), c(155, 155, 155), c(165, 168, 170), c(175, 175, 175)]),
    ("meteor", [c(105, 105, 105), c(119, 136, 153), c(128, 128, 128), c(178, 34, 34)]),
    ("asteroid", [c(70, 70, 70), c(90, 90, 90), c(110, 110, 110), c(130, 130, 130)]),
    ("cosmic", [c(72, 61, 139), c(75, 0, 130), c(106, 90, 205), c(123, 104, 238)]),
    ("star", [c(255, 255, 224), c(255, 250, 205), c(240, 230, 140), c(255, 215, 0)]),
    ("nebula", [c(147, 112, 219), c(138, 43, 226), c(186, 85, 211), c(218, 112, 214)]),
    ("galaxy", [c(25, 25, 112), c(72, 61, 139), c(106, 90, 205), c(138, 43, 226)]),
    ("planet", [c(154, 205, 50), c(233, 150, 122), c(210, 105, 30), c(160, 82, 45)]),
    ("grassland", [c(124, 252, 0), c(127, 255, 0), c(0, 250, 154), c(50, 205, 50)]),
    ("savanna", [c(210, 180, 140), c(222, 184, 135), c(238, 232, 170), c(189, 183, 107)]),
    ("jungle", [c(0, 100, 0), c(34, 139, 34), c(85, 107, 47), c(46, 139, 87)]),
    ("rainforest", [c(34, 139, 34), c(0, 128, 0), c(60, 179, 113), c(123, 153, 34)]),
    ("wetland", [c(107, 142, 35), c(154, 205, 50), c(0, 191, 255), c(70, 130, 180)]),
    ("swamp", [c(47, 79, 79), c(85, 107, 47), c(50, 205, 50), c(0, 100, 0)]),
    ("bog", [c(80, 100, 60), c(70, 80, 50), c(85, 107, 47), c(65, 80, 45)]),
    ("marsh", [c(100, 120, 70), c(90, 110, 60), c(107, 142, 35), c(154, 205, 50)]),
    ("tundra", [c(230, 230, 250), c(240, 255, 255), c(245, 245, 245), c(220, 220, 220)]),
    ("iceberg", [c(173, 216, 230), c(224, 255, 255), c(240, 255, 255), c(176, 224, 230)]),
    ("frozen", [c(176, 224, 230), c(173, 216, 230), c(224, 255, 255), c(220, 220, 255)]),
    ("arctic", [c(245, 245, 255), c(240, 255, 255), c(230, 230, 250), c(255, 250, 250)]),
    ("underwater", [c(0, 105, 148), c(0, 128, 255), c(70, 130, 180), c(25, 25, 112)]),
    ("deepsea", [c(25, 25, 112), c(0, 0, 128), c(0, 0, 139), c(0, 100, 160)]),
    ("reef", [c(255, 160, 122), c(255, 127, 80), c(46, 139, 87), c(0, 128, 128)]),
    ("shore", [c(210, 180, 140), c(238, 214, 175), c(70, 130, 180), c(25, 25, 112)]),
    ("beach", [c(238, 214, 175), c(222, 184, 135), c(240, 230, 140), c(70, 130, 180)]),
    ("volcanic", [c(105, 105, 105), c(139, 0, 0), c(205, 38, 38), c(70, 70, 70)]),
    ("ash", [c(80, 80, 80), c(100, 100, 100), c(120, 120, 120), c(140, 140, 140)]),
    ("charred", [c(60, 60, 60), c(80, 80, 80), c(100, 100, 100), c(120, 120, 120)]),
    ("burnt", [c(139, 69, 19), c(160, 82, 45), c(105, 105, 105), c(70, 70, 70)]),
    ("crystal", [c(224, 255, 255), c(175, 238, 238), c(176, 224, 230), c(173, 216, 230)]),
    ("ruby", [c(224, 17, 95), c(227, 11, 93), c(178, 34, 34), c(139, 0, 0)]),
    ("sapphire", [c(15, 82, 186), c(0, 0, 139), c(25, 25, 112), c(0, 0, 205)]),
    ("amethyst", [c(153, 102, 204), c(138, 43, 226), c(186, 85, 211), c(123, 104, 238)]),
    ("quartz", [c(255, 255, 255), c(245, 245, 245), c(240, 240, 240), c(230, 230, 230)]),
    ("opal", [c(168, 195, 188), c(178, 223, 238), c(224, 255, 255), c(152, 251, 152)]),
    ("pearl", [c(234, 224, 200), c(255, 239, 219), c(255, 245, 238), c(245, 245, 245)]),
    ("enigma", [c(75, 0, 130), c(106, 90, 205), c(72, 61, 139), c(128, 0, 128)]),
    ("mystic", [c(138, 43, 226), c(148, 0, 211), c(186, 85, 211), c(153, 50, 204)]),
    ("mythic", [c(199, 21, 133), c(218, 112, 214), c(255, 105, 180), c(219, 112, 147)]),
    ("legend", [c(255, 215, 0), c(238, 221, 130), c(189, 183, 107), c(218, 165, 32)]),
    ("relic", [c(184, 134, 11), c(218, 165, 32), c(205, 133, 63), c(139, 69, 19)]),
    ("artifact", [c(220, 220, 220), c(245, 245, 245), c(192, 192, 192), c(255, 250, 240)]),
    ("ancient", [c(205, 133, 63), c(160, 82, 45), c(139, 69, 19), c(110, 40, 19)]),
    ("future", [c(192, 192, 192), c(211, 211, 211), c(60, 60, 60), c(128, 128, 128)]),
    ("cyber", [c(0, 255, 255), c(0, 250, 154), c(127, 255, 212), c(0, 255, 127)]),
    ("tech", [c(105, 105, 105), c(128, 128, 128), c(192, 192, 192), c(220, 220, 220)]),
    ("robotic", [c(200, 200, 200), c(169, 169, 169), c(105, 105, 105), c(255, 215, 0)]),
    ("mechanical", [c(139, 137, 137), c(160, 160, 160), c(190, 190, 190), c(218, 165, 32)]),
    ("steam", [c(169, 169, 169), c(211, 211, 211), c(192, 192, 192), c(205, 201, 201)]),
    ("clockwork", [c(205, 201, 201), c(192, 192, 192), c(218, 165, 32), c(184, 134, 11)]),
    ("brass", [c(181, 166, 66), c(205, 127, 50), c(184, 134, 11), c(218, 165, 32)]),
    ("ironwork", [c(188, 188, 188), c(169, 169, 169), c(192, 192, 192), c(128, 128, 128)]),
    ("wire", [c(90, 90, 90), c(130, 130, 130), c(160, 160, 160), c(192, 192, 192)]),
    ("circuit", [c(0, 255, 127), c(127, 255, 0), c(46, 139, 87), c(60, 179, 113)]),
    ("chip", [c(192, 192, 192), c(128, 128, 128), c(72, 61, 139), c(255, 255, 224)]),
    ("binary", [c(0, 0, 0), c(255, 255, 255), c(32, 32, 32), c(224, 224, 224)]),
    ("digital", [c(0, 255, 255), c(127, 255, 212), c(255, 255, 0), c(124, 252, 0)]),
    ("virtual", [c(186, 85, 211), c(147, 112, 219), c(0, 255, 255), c(173, 216, 230)]),
    ("hologram", [c(102, 205, 170), c(0, 255, 255), c(127, 255, 212), c(0, 206, 209)]),
    ("mirror", [c(245, 245, 245), c(224, 224, 224), c(211, 211, 211), c(192, 192, 192)]),
    ("glassland", [c(180, 180, 255), c(200, 200, 255), c(220, 220, 255), c(240, 240, 255)]),
    ("translucent", [c(255, 255, 255), c(240, 248, 255), c(224, 255, 255), c(248, 248, 255)]),
    ("phantom", [c(119, 136, 153), c(105, 105, 105), c(40, 40, 40), c(70, 70, 70)]),
    ("ethereal", [c(224, 255, 255), c(255, 250, 240), c(250, 240, 230), c(230, 230, 250)]),
    ("celestial", [c(135, 206, 235), c(176, 196, 222), c(220, 220, 255), c(192, 192, 255)]),
    ("astral", [c(123, 104, 238), c(106, 90, 205), c(72, 61, 139), c(138, 43, 226)]),
    ("heaven", [c(240, 255, 255), c(224, 255, 255), c(255, 255, 240), c(255, 250, 250)]),
    ("hell", [c(139, 0, 0), c(178, 34, 34), c(255, 0, 0), c(70, 70, 70)]),
    ("demon", [c(178, 34, 34), c(139, 0, 0), c(70, 70, 70), c(40, 40, 40)]),
    ("angel", [c(255, 255, 224), c(255, 250, 205), c(245, 245, 245), c(224, 255, 255)]),
    ("seraph", [c(255, 245, 238), c(255, 250, 250), c(230, 230, 250), c(255, 250, 205)]),
    ("dragon", [c(139, 0, 0), c(205, 38, 38), c(85, 107, 47), c(46, 139, 87)]),
    ("wyvern", [c(46, 139, 87), c(0, 128, 128), c(60, 179, 113), c(34, 139, 34)]),
    ("drake", [c(128, 0, 0), c(178, 34, 34), c(50, 50, 50), c(60, 60, 60)]),
    ("hydra", [c(0, 100, 0), c(0, 139, 139), c(60, 179, 113), c(107, 142, 35)]),
    ("serpent", [c(0, 128, 128), c(0, 100, 0), c(85, 107, 47), c(128, 0, 0)]),
    ("worm", [c(160, 82, 45), c(139, 69, 19), c(128, 0, 0), c(184, 134, 11)]),
    ("golem", [c(100, 100, 100), c(130, 130, 130), c(160, 160, 160), c(70, 70, 70)]),
    ("construct", [c(139, 137, 137), c(120, 120, 120), c(90, 90, 90), c(180, 180, 180)]),
    ("automaton", [c(192, 192, 192), c(169, 169, 169), c(128, 128, 128), c(105, 105, 105)]),
    ("puppet", [c(210, 180, 140), c(139, 69, 19), c(160, 82, 45), c(100, 80, 60)]),
    ("homunculus", [c(255, 160, 122), c(205, 133, 63), c(139, 69, 19), c(178, 34, 34)]),
    ("borg", [c(128, 128, 128), c(192, 192, 192), c(0, 255, 0), c(0, 128, 0)]),
    ("biomech", [c(139, 69, 19), c(160, 82, 45), c(192, 192, 192), c(128, 128, 128)]),
    ("biotech", [c(107, 142, 35), c(0, 128, 0), c(127, 255, 0), c(60, 179, 113)]),
    ("gene", [c(144, 238, 144), c(152, 251, 152), c(124, 252, 0), c(0, 255, 127)]),
    ("dna", [c(255, 0, 255), c(186, 85, 211), c(147, 112, 219), c(138, 43, 226)]),
    ("virus", [c(128, 0, 0), c(178, 34, 34), c(220, 20, 60), c(255, 69, 0)]),
    ("bacteria", [c(189, 183, 107), c(143, 188, 143), c(127, 255, 0), c(173, 255, 47)]),
    ("fungus", [c(139, 69, 19), c(222, 184, 135), c(154, 205, 50), c(107, 142, 35)]),
    ("algae", [c(0, 128, 128), c(0, 100, 0), c(34, 139, 34), c(46, 139, 87)]),
    ("lichen", [c(107, 142, 35), c(143, 188, 143), c(154, 205, 50), c(85, 107, 47)]),
    ("mold", [c(96, 128, 56), c(85, 107, 47), c(110, 139, 61), c(34, 139, 34)]),
    ("yeast", [c(255, 255, 224), c(255, 250, 205), c(255, 245, 238), c(253, 245, 230)]),
    ("petri", [c(211, 211, 211), c(255, 255, 224), c(127, 255, 212), c(127, 255, 0)]),
    ("lab", [c(192, 192, 192), c(211, 211, 211), c(220, 220, 220), c(240, 248, 255)]),
    ("science", [c(173, 216, 230), c(176, 196, 222), c(224, 255, 255), c(0, 255, 255)]),
    ("alchemy", [c(238, 221, 130), c(218, 165, 32), c(184, 134, 11), c(245, 245, 220)]),
    ("potion", [c(255, 20, 147), c(218, 112, 214), c(186, 85, 211), c(147, 112, 219)]),
    ("tonic", [c(0, 255, 127), c(60, 179, 113), c(127, 255, 212), c(255, 105, 180)]),
    ("elixir", [c(255, 69, 0), c(255, 140, 0), c(0, 255, 255), c(173, 216, 230)]),
    ("brew", [c(139, 69, 19), c(160, 82, 45), c(222, 184, 135), c(210, 105, 30)]),
    ("mix", [c(255, 192, 203), c(219, 112, 147), c(186, 85, 211), c(0, 255, 127)]),
    ("amalgam", [c(255, 215, 0), c(255, 140, 0), c(220, 20, 60), c(138, 43, 226)]),
];

static DICTIONARY: LazyLock<PaletteDictionary> = LazyLock::new(PaletteDictionary::builtin);

/// Closed mapping from lowercase word to a four-color palette
#[derive(Debug, Clone)]
pub struct PaletteDictionary {
    palettes: HashMap<&'static str, [Color; 4]>,
    sorted_words: Vec<&'static str>,
}

impl PaletteDictionary {
    /// Build the dictionary from the static entry table
    pub fn builtin() -> Self {
        let palettes: HashMap<&'static str, [Color; 4]> = ENTRIES.iter().copied().collect();
        let mut sorted_words: Vec<&'static str> = palettes.keys().copied().collect();
        sorted_words.sort_unstable();

        Self {
            palettes,
            sorted_words,
        }
    }

    /// Shared instance built on first use
    pub fn global() -> &'static Self {
        &DICTIONARY
    }

    /// Resolve a word to its palette, defaulting to "grass" on a miss
    pub fn lookup(&self, word: &str) -> Palette {
        let key = word.trim().to_lowercase();
        let colors = self
            .palettes
            .get(key.as_str())
            .or_else(|| self.palettes.get(DEFAULT_WORD))
            .copied()
            .unwrap_or([Color::BLACK; 4]);

        Palette::from(colors)
    }

    /// Check whether a word has its own entry
    pub fn contains(&self, word: &str) -> bool {
        self.palettes.contains_key(word.trim().to_lowercase().as_str())
    }

    /// All words in ascending order
    pub fn words(&self) -> &[&'static str] {
        &self.sorted_words
    }

    /// Position of a word in the sorted word list
    pub fn index_of(&self, word: &str) -> Option<usize> {
        let key = word.trim().to_lowercase();
        self.sorted_words.binary_search(&key.as_str()).ok()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.sorted_words.len()
    }

    /// Always false for the built-in table
    pub fn is_empty(&self) -> bool {
        self.sorted_words.is_empty()
    }
}

impl Default for PaletteDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
