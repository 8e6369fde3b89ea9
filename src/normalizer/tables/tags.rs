/// `AniList` tag name to genre code. Several tags share a code with a genre
/// or with each other; the merge deduplicates.
pub const TAGS: &[(&str, u32)] = &[
    ("4-koma", 33),
    ("Acting", 83),
    ("Adoption", 35),
    ("Afterlife", 55),
    ("Age Gap", 51),
    ("Agriculture", 100),
    ("Airsoft", 7),
    ("Alchemy", 18),
    ("Aliens", 61),
    ("Alternate Universe", 74),
    ("American Football", 69),
    ("Amnesia", 49),
    ("Anachronism", 8),
    ("Angels", 90),
    ("Animals", 64),
    ("Anthology", 91),
    ("Anthropomorphism", 64),
    ("Anti-Hero", 93),
    ("Archery", 54),
    ("Artificial Intelligence", 52),
    ("Assassins", 25),
    ("Astronomy", 11),
    ("Athletics", 54),
    ("Augmented Reality", 65),
    ("Autobiographical", 41),
    ("Badminton", 54),
    ("Band", 48),
    ("Baseball", 69),
    ("Basketball", 69),
    ("Battle Royale", 27),
    ("Biographical", 8),
    ("Bisexual", 51),
    ("Body Horror", 45),
    ("Body Swapping", 55),
    ("Boxing", 70),
    ("Boys' Love", 30),
    ("Bullying", 6),
    ("Butler", 23),
    ("Calligraphy", 82),
    ("Cannibalism", 26),
    ("Card Battle", 67),
    ("Cars", 68),
    ("Centaur", 63),
    ("Cheerleading", 54),
    ("Chibi", 33),
    ("Chimera", 57),
    ("Chuunibyou", 40),
    ("Circus", 83),
    ("Classic Literature", 8),
    ("College", 6),
    ("Coming of Age", 36),
    ("Conspiracy", 88),
    ("Cosmic Horror", 45),
    ("Cosplay", 84),
    ("Crime", 25),
    ("Crossdressing", 40),
    ("Crossover", 74),
    ("Cult", 90),
    ("Cultivation", 10),
    ("Cute Girls Doing Cute Things", 53),
    ("Cyberpunk", 12),
    ("Cyborg", 12),
    ("Cycling", 68),
    ("Dancing", 48),
    ("Dark Fantasy", 73),
    ("Death Game", 27),
    ("Delinquents", 85),
    ("Demons", 17),
    ("Denpa", 50),
    ("Desert", 27),
    ("Detective", 24),
    ("Dinosaurs", 39),
    ("Dissociative Identities", 50),
    ("Dragons", 43),
    ("Drawing", 83),
    ("Drugs", 25),
    ("Dullahan", 63),
    ("Dungeon", 66),
    ("Dystopian", 14),
    ("E-Sports", 66),
    ("Economics", 23),
    ("Educational", 82),
    ("Elf", 43),
    ("Ensemble Cast", 92),
    ("Environmental", 100),
    ("Episodic", 91),
    ("Espionage", 80),
    ("Fairy Tale", 43),
    ("Family Life", 35),
    ("Fashion", 83),
    ("Female Harem", 28),
    ("Female Protagonist", 94),
    ("Fencing", 70),
    ("Firefighters", 23),
    ("Fishing", 100),
    ("Fitness", 54),
    ("Food", 98),
    ("Football", 69),
    ("Foreign", 99),
    ("Fugitive", 56),
    ("Gambling", 71),
    ("Gangs", 85),
    ("Gender Bending", 55),
    ("Ghost", 55),
    ("Go", 71),
    ("Goblin", 43),
    ("Gods", 57),
    ("Golf", 54),
    ("Gore", 26),
    ("Guns", 38),
    ("Gyaru", 6),
    ("Harem", 28),
    ("Henshin", 46),
    ("Heterosexual", 51),
    ("Hikikomori", 84),
    ("Historical", 8),
    ("Homeless", 41),
    ("Ice Skating", 54),
    ("Idol", 21),
    ("Isekai", 74),
    ("Iyashikei", 34),
    ("Josei", 4),
    ("Judo", 70),
    ("Kaiju", 47),
    ("Karuta", 71),
    ("Kemonomimi", 64),
    ("Kids", 5),
    ("Kingdom Management", 77),
    ("Lacrosse", 69),
    ("Language Barrier", 99),
    ("LGBTQ+ Themes", 31),
    ("Love Triangle", 51),
    ("Mafia", 87),
    ("Magic", 18),
    ("Mahjong", 71),
    ("Maids", 23),
    ("Male Harem", 29),
    ("Male Protagonist", 95),
    ("Martial Arts", 10),
    ("Medicine", 81),
    ("Memory Manipulation", 50),
    ("Mermaid", 63),
    ("Meta", 32),
    ("Military", 7),
    ("Monster Boy", 63),
    ("Monster Girl", 63),
    ("Motorcycles", 68),
    ("Music", 48),
    ("Musical", 48),
    ("Mythology", 57),
    ("Necromancy", 73),
    ("Nekomimi", 64),
    ("Ninja", 58),
    ("Noir", 25),
    ("Nudity", 42),
    ("Office Lady", 23),
    ("Oiran", 8),
    ("Ojou-sama", 2),
    ("Otaku Culture", 84),
    ("Outdoor", 99),
    ("Parody", 32),
    ("Philosophy", 89),
    ("Photography", 83),
    ("Pirates", 59),
    ("Poker", 71),
    ("Police", 25),
    ("Politics", 77),
    ("Post-Apocalyptic", 13),
    ("Primarily Adult Cast", 97),
    ("Primarily Child Cast", 96),
    ("Primarily Female Cast", 94),
    ("Primarily Male Cast", 95),
    ("Puppetry", 83),
    ("Rakugo", 83),
    ("Real Robot", 60),
    ("Rehabilitation", 81),
    ("Reincarnation", 75),
    ("Religion", 90),
    ("Revenge", 76),
    ("Reverse Harem", 29),
    ("Robots", 60),
    ("Rugby", 69),
    ("Rural", 100),
    ("Samurai", 9),
    ("Satire", 32),
    ("School", 6),
    ("School Club", 6),
    ("Seinen", 3),
    ("Shogi", 71),
    ("Shoujo", 2),
    ("Shounen", 1),
    ("Slapstick", 33),
    ("Slavery", 41),
    ("Space", 11),
    ("Space Opera", 11),
    ("Spearplay", 10),
    ("Steampunk", 52),
    ("Strategy Game", 71),
    ("Suicide", 37),
    ("Sumo", 70),
    ("Super Power", 19),
    ("Super Robot", 47),
    ("Superhero", 19),
    ("Surfing", 54),
    ("Surreal Comedy", 33),
    ("Survival", 27),
    ("Swimming", 54),
    ("Swordplay", 10),
    ("Table Tennis", 54),
    ("Tanks", 7),
    ("Teacher", 82),
    ("Teens' Love", 51),
    ("Tennis", 54),
    ("Terrorism", 79),
    ("Time Manipulation", 15),
    ("Time Skip", 15),
    ("Tokusatsu", 19),
    ("Tragedy", 37),
    ("Trains", 99),
    ("Travel", 99),
    ("Urban", 101),
    ("Urban Fantasy", 72),
    ("Vampire", 16),
    ("Video Games", 66),
    ("Virtual World", 65),
    ("Volleyball", 69),
    ("War", 78),
    ("Witch", 18),
    ("Work", 23),
    ("Workplace", 23),
    ("Wrestling", 70),
    ("Writing", 83),
    ("Wuxia", 10),
    ("Yakuza", 86),
    ("Yandere", 50),
    ("Youkai", 55),
    ("Yuri", 31),
    ("Zombie", 62),
];
