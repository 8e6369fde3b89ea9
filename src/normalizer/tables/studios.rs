/// `AniList` studio name to studio code, in code order. Matching is exact.
pub const STUDIOS: &[(&str, u32)] = &[
    ("Sunrise", 1),
    ("Toei Animation", 2),
    ("TMS Entertainment", 3),
    ("Tatsunoko Production", 4),
    ("Nippon Animation", 5),
    ("Pierrot", 6),
    ("Madhouse", 7),
    ("Studio Ghibli", 8),
    ("Gainax", 9),
    ("Production I.G", 10),
    ("J.C.Staff", 11),
    ("Shaft", 12),
    ("Bones", 13),
    ("Gonzo", 14),
    ("Xebec", 15),
    ("Studio Deen", 16),
    ("A.C.G.T.", 17),
    ("Brain's Base", 18),
    ("Kyoto Animation", 19),
    ("Satelight", 20),
    ("Studio 4°C", 21),
    ("Bee Train", 22),
    ("Arms", 23),
    ("Zexcs", 24),
    ("AIC", 25),
    ("AIC ASTA", 26),
    ("AIC Build", 27),
    ("AIC Spirits", 28),
    ("Actas", 29),
    ("Ajia-do", 30),
    ("Artland", 31),
    ("Asahi Production", 32),
    ("Asread", 33),
    ("Bandai Namco Pictures", 34),
    ("Bridge", 35),
    ("C-Station", 36),
    ("C2C", 37),
    ("CloverWorks", 38),
    ("CoMix Wave Films", 39),
    ("Connect", 40),
    ("Creators in Pack", 41),
    ("CygamesPictures", 42),
    ("David Production", 43),
    ("Diomedéa", 44),
    ("Doga Kobo", 45),
    ("Drive", 46),
    ("EMT Squared", 47),
    ("Encourage Films", 48),
    ("feel.", 49),
    ("Fanworks", 50),
    ("Gallop", 51),
    ("Geek Toys", 52),
    ("GEMBA", 53),
    ("Geno Studio", 54),
    ("Graphinica", 55),
    ("Group TAC", 56),
    ("Hal Film Maker", 57),
    ("Haoliners Animation League", 58),
    ("Hoods Entertainment", 59),
    ("Imagin", 60),
    ("Kinema Citrus", 61),
    ("Knack Productions", 62),
    ("Kyotoma", 63),
    ("Lay-duce", 64),
    ("Lerche", 65),
    ("LIDENFILMS", 66),
    ("Magic Bus", 67),
    ("Manglobe", 68),
    ("Marvelous Entertainment", 69),
    ("Millepensee", 70),
    ("Nexus", 71),
    ("NAZ", 72),
    ("Nomad", 73),
    ("Nut", 74),
    ("OLM", 75),
    ("Orange", 76),
    ("Passione", 77),
    ("P.A. Works", 78),
    ("Pine Jam", 79),
    ("Platinum Vision", 80),
    ("Polygon Pictures", 81),
    ("Production IMS", 82),
    ("Production Reed", 83),
    ("Project No.9", 84),
    ("Radix", 85),
    ("Revoroot", 86),
    ("Sanzigen", 87),
    ("Science SARU", 88),
    ("Seven", 89),
    ("Seven Arcs", 90),
    ("Seven Arcs Pictures", 91),
    ("Shin-Ei Animation", 92),
    ("Shuka", 93),
    ("Signal.MD", 94),
    ("SILVER LINK.", 95),
    ("Studio Bind", 96),
    ("Studio Blanc", 97),
    ("Studio Chizu", 98),
    ("Studio Colorido", 99),
    ("Studio Comet", 100),
    ("Studio Flag", 101),
    ("Studio Gokumi", 102),
    ("Studio Hibari", 103),
    ("Studio Kai", 104),
    ("Studio Palette", 105),
    ("Studio PuYUKAI", 106),
    ("Studio VOLN", 107),
    ("Sunrise Beyond", 108),
    ("Studio A-CAT", 109),
    ("Studio Elle", 110),
    ("Studio Fantasia", 111),
    ("Studio Junio", 112),
    ("Studio Matrix", 113),
    ("Studio Mother", 114),
    ("Studio Signpost", 115),
    ("Tezuka Productions", 116),
    ("Telecom Animation Film", 117),
    ("Tear Studio", 118),
    ("Tokyo Movie Shinsha", 119),
    ("TNK", 120),
    ("Trigger", 121),
    ("Triangle Staff", 122),
    ("Tulip Films", 123),
    ("Typhoon Graphics", 124),
    ("ufotable", 125),
    ("White Fox", 126),
    ("Wit Studio", 127),
    ("Yaoyorozu", 128),
    ("Yostar Pictures", 129),
    ("Yumeta Company", 130),
    ("Zero-G", 131),
    ("8bit", 132),
    ("A-1 Pictures", 133),
    ("Ashi Productions", 134),
    ("Aniplex", 135),
    ("Atelier Pontdarc", 136),
    ("B.CMAY PICTURES", 137),
    ("Bibury Animation Studios", 138),
    ("Children's Playground Entertainment", 139),
    ("Cloud Hearts", 140),
    ("Colored Pencil Animation", 141),
    ("Craftar", 142),
    ("DLE", 143),
    ("Digital Frontier", 144),
    ("Dynamo Pictures", 145),
    ("E&G Films", 146),
    ("ENGI", 147),
    ("EzÓla", 148),
    ("Felix Film", 149),
    ("Fuji TV", 150),
    ("GoHands", 151),
    ("Gathering", 152),
    ("Hayabusa Film", 153),
    ("Hotline", 154),
    ("Jumondo", 155),
    ("Kamikaze Douga", 156),
    ("Kenji Studio", 157),
    ("Khara", 158),
    ("Lesprit", 159),
    ("Liber", 160),
    ("M.S.C", 161),
    ("Maho Film", 162),
    ("Marza Animation Planet", 163),
    ("Mook Animation", 164),
    ("Motion Magic", 165),
    ("NAMU Animation", 166),
    ("Nippon Television", 167),
    ("Okuruto Noboru", 168),
    ("Orange Bird", 169),
    ("Pony Canyon", 170),
    ("Production +h.", 171),
    ("Quad", 172),
    ("Rising Force", 173),
    ("Saetta", 174),
    ("Sanrio", 175),
    ("SynergySP", 176),
    ("Studio 3Hz", 177),
    ("Studio Kafka", 178),
    ("Shirogumi", 179),
    ("Studio Add", 180),
    ("Odd No.", 181),
    ("MAPPA", 182),
    ("Studio Hokiboshi", 183),
    ("Studio Lings", 184),
    ("Studio Rikka", 185),
    ("Studio Ponoc", 186),
    ("Studio Durian", 187),
    ("Studio Massket", 188),
    ("Studio Moriken", 189),
    ("Studio Nanahoshi", 190),
    ("Studio Sota", 191),
    ("Sublimation", 192),
    ("Tencent Penguin Pictures", 193),
    ("Tengu Kobo", 194),
    ("Thundray", 195),
    ("TROYCA", 196),
    ("Twin Engine", 197),
    ("Tokyo Kids", 198),
    ("Visual Flight", 199),
    ("W-Toon Studio", 200),
    ("Yokohama Animation Laboratory", 201),
    ("Yuhodo", 202),
    ("Cyclone Graphics", 203),
    ("Djinn Power", 204),
    ("Egg Firm", 205),
    ("Ekachi Epilka", 206),
    ("Fuka Animation", 207),
    ("Gekkou", 208),
    ("Good Smile Film", 209),
    ("Hornets", 210),
    ("Jinnis Animation Studios", 211),
    ("Kachidoki Studio", 212),
    ("Kanaban Graphics", 213),
    ("Kiryuu", 214),
    ("Lapin Track", 215),
    ("Larx Entertainment", 216),
    ("Mili Pictures", 217),
    ("Nippon Ramayana Film", 218),
    ("OZ", 219),
    ("Pb Animation", 220),
    ("Picture Magic", 221),
    ("Production GoodBook", 222),
    ("Rabbit Machine", 223),
    ("Remic", 224),
    ("Sola Digital Arts", 225),
    ("Studio Bogey", 226),
    ("Studio Crocodile", 227),
    ("Studio Guts", 228),
    ("Studio Jemi", 229),
    ("Studio Live", 230),
    ("Studio Nue", 231),
    ("Studio Unicorn", 232),
    ("Team Yamahitsuji", 233),
    ("Tomovies", 234),
    ("Wao World", 235),
    ("Xflag Pictures", 236),
];
