//! Embedded emoji table.
//!
//! Each row is `(name, character, shortcode, html entity, escape sequence)`.
//! All four representations of a row encode the same code points; this is
//! checked by `Catalog::builtin` tests.

pub(crate) type RawEmoji = (&'static str, &'static str, &'static str, &'static str, &'static str);

pub(crate) const EMOJI_TABLE: &[RawEmoji] = &[
    // Smileys & emotion
    ("smile", "\u{1f604}", ":smile:", "&#x1f604;", r"\U0001F604"),
    ("grinning", "\u{1f600}", ":grinning:", "&#x1f600;", r"\U0001F600"),
    ("smiley", "\u{1f603}", ":smiley:", "&#x1f603;", r"\U0001F603"),
    ("grin", "\u{1f601}", ":grin:", "&#x1f601;", r"\U0001F601"),
    ("laughing", "\u{1f606}", ":laughing:", "&#x1f606;", r"\U0001F606"),
    ("sweat_smile", "\u{1f605}", ":sweat_smile:", "&#x1f605;", r"\U0001F605"),
    ("joy", "\u{1f602}", ":joy:", "&#x1f602;", r"\U0001F602"),
    ("rofl", "\u{1f923}", ":rofl:", "&#x1f923;", r"\U0001F923"),
    ("blush", "\u{1f60a}", ":blush:", "&#x1f60a;", r"\U0001F60A"),
    ("innocent", "\u{1f607}", ":innocent:", "&#x1f607;", r"\U0001F607"),
    ("slightly_smiling_face", "\u{1f642}", ":slightly_smiling_face:", "&#x1f642;", r"\U0001F642"),
    ("upside_down_face", "\u{1f643}", ":upside_down_face:", "&#x1f643;", r"\U0001F643"),
    ("wink", "\u{1f609}", ":wink:", "&#x1f609;", r"\U0001F609"),
    ("relieved", "\u{1f60c}", ":relieved:", "&#x1f60c;", r"\U0001F60C"),
    ("heart_eyes", "\u{1f60d}", ":heart_eyes:", "&#x1f60d;", r"\U0001F60D"),
    ("star_struck", "\u{1f929}", ":star_struck:", "&#x1f929;", r"\U0001F929"),
    ("kissing_heart", "\u{1f618}", ":kissing_heart:", "&#x1f618;", r"\U0001F618"),
    ("yum", "\u{1f60b}", ":yum:", "&#x1f60b;", r"\U0001F60B"),
    ("stuck_out_tongue", "\u{1f61b}", ":stuck_out_tongue:", "&#x1f61b;", r"\U0001F61B"),
    ("stuck_out_tongue_winking_eye", "\u{1f61c}", ":stuck_out_tongue_winking_eye:", "&#x1f61c;", r"\U0001F61C"),
    ("zany_face", "\u{1f92a}", ":zany_face:", "&#x1f92a;", r"\U0001F92A"),
    ("hugs", "\u{1f917}", ":hugs:", "&#x1f917;", r"\U0001F917"),
    ("thinking", "\u{1f914}", ":thinking:", "&#x1f914;", r"\U0001F914"),
    ("shushing_face", "\u{1f92b}", ":shushing_face:", "&#x1f92b;", r"\U0001F92B"),
    ("neutral_face", "\u{1f610}", ":neutral_face:", "&#x1f610;", r"\U0001F610"),
    ("expressionless", "\u{1f611}", ":expressionless:", "&#x1f611;", r"\U0001F611"),
    ("no_mouth", "\u{1f636}", ":no_mouth:", "&#x1f636;", r"\U0001F636"),
    ("smirk", "\u{1f60f}", ":smirk:", "&#x1f60f;", r"\U0001F60F"),
    ("unamused", "\u{1f612}", ":unamused:", "&#x1f612;", r"\U0001F612"),
    ("roll_eyes", "\u{1f644}", ":roll_eyes:", "&#x1f644;", r"\U0001F644"),
    ("grimacing", "\u{1f62c}", ":grimacing:", "&#x1f62c;", r"\U0001F62C"),
    ("lying_face", "\u{1f925}", ":lying_face:", "&#x1f925;", r"\U0001F925"),
    ("pensive", "\u{1f614}", ":pensive:", "&#x1f614;", r"\U0001F614"),
    ("sleepy", "\u{1f62a}", ":sleepy:", "&#x1f62a;", r"\U0001F62A"),
    ("sleeping", "\u{1f634}", ":sleeping:", "&#x1f634;", r"\U0001F634"),
    ("mask", "\u{1f637}", ":mask:", "&#x1f637;", r"\U0001F637"),
    ("nerd_face", "\u{1f913}", ":nerd_face:", "&#x1f913;", r"\U0001F913"),
    ("sunglasses", "\u{1f60e}", ":sunglasses:", "&#x1f60e;", r"\U0001F60E"),
    ("partying_face", "\u{1f973}", ":partying_face:", "&#x1f973;", r"\U0001F973"),
    ("confused", "\u{1f615}", ":confused:", "&#x1f615;", r"\U0001F615"),
    ("worried", "\u{1f61f}", ":worried:", "&#x1f61f;", r"\U0001F61F"),
    ("open_mouth", "\u{1f62e}", ":open_mouth:", "&#x1f62e;", r"\U0001F62E"),
    ("astonished", "\u{1f632}", ":astonished:", "&#x1f632;", r"\U0001F632"),
    ("flushed", "\u{1f633}", ":flushed:", "&#x1f633;", r"\U0001F633"),
    ("pleading_face", "\u{1f97a}", ":pleading_face:", "&#x1f97a;", r"\U0001F97A"),
    ("fearful", "\u{1f628}", ":fearful:", "&#x1f628;", r"\U0001F628"),
    ("cry", "\u{1f622}", ":cry:", "&#x1f622;", r"\U0001F622"),
    ("sob", "\u{1f62d}", ":sob:", "&#x1f62d;", r"\U0001F62D"),
    ("scream", "\u{1f631}", ":scream:", "&#x1f631;", r"\U0001F631"),
    ("confounded", "\u{1f616}", ":confounded:", "&#x1f616;", r"\U0001F616"),
    ("disappointed", "\u{1f61e}", ":disappointed:", "&#x1f61e;", r"\U0001F61E"),
    ("sweat", "\u{1f613}", ":sweat:", "&#x1f613;", r"\U0001F613"),
    ("weary", "\u{1f629}", ":weary:", "&#x1f629;", r"\U0001F629"),
    ("tired_face", "\u{1f62b}", ":tired_face:", "&#x1f62b;", r"\U0001F62B"),
    ("yawning_face", "\u{1f971}", ":yawning_face:", "&#x1f971;", r"\U0001F971"),
    ("triumph", "\u{1f624}", ":triumph:", "&#x1f624;", r"\U0001F624"),
    ("rage", "\u{1f621}", ":rage:", "&#x1f621;", r"\U0001F621"),
    ("angry", "\u{1f620}", ":angry:", "&#x1f620;", r"\U0001F620"),
    ("skull", "\u{1f480}", ":skull:", "&#x1f480;", r"\U0001F480"),
    ("poop", "\u{1f4a9}", ":poop:", "&#x1f4a9;", r"\U0001F4A9"),
    ("clown_face", "\u{1f921}", ":clown_face:", "&#x1f921;", r"\U0001F921"),
    ("ghost", "\u{1f47b}", ":ghost:", "&#x1f47b;", r"\U0001F47B"),
    ("alien", "\u{1f47d}", ":alien:", "&#x1f47d;", r"\U0001F47D"),
    ("robot", "\u{1f916}", ":robot:", "&#x1f916;", r"\U0001F916"),
    ("smiley_cat", "\u{1f63a}", ":smiley_cat:", "&#x1f63a;", r"\U0001F63A"),
    ("heart_eyes_cat", "\u{1f63b}", ":heart_eyes_cat:", "&#x1f63b;", r"\U0001F63B"),
    ("see_no_evil", "\u{1f648}", ":see_no_evil:", "&#x1f648;", r"\U0001F648"),
    ("hear_no_evil", "\u{1f649}", ":hear_no_evil:", "&#x1f649;", r"\U0001F649"),
    ("speak_no_evil", "\u{1f64a}", ":speak_no_evil:", "&#x1f64a;", r"\U0001F64A"),
    // People & body
    ("thumbs_up", "\u{1f44d}", ":thumbs_up:", "&#x1f44d;", r"\U0001F44D"),
    ("thumbs_down", "\u{1f44e}", ":thumbs_down:", "&#x1f44e;", r"\U0001F44E"),
    ("wave", "\u{1f44b}", ":wave:", "&#x1f44b;", r"\U0001F44B"),
    ("clap", "\u{1f44f}", ":clap:", "&#x1f44f;", r"\U0001F44F"),
    ("raised_hands", "\u{1f64c}", ":raised_hands:", "&#x1f64c;", r"\U0001F64C"),
    ("pray", "\u{1f64f}", ":pray:", "&#x1f64f;", r"\U0001F64F"),
    ("ok_hand", "\u{1f44c}", ":ok_hand:", "&#x1f44c;", r"\U0001F44C"),
    ("v", "\u{270c}\u{fe0f}", ":v:", "&#x270c;&#xfe0f;", r"\U0000270C\uFE0F"),
    ("crossed_fingers", "\u{1f91e}", ":crossed_fingers:", "&#x1f91e;", r"\U0001F91E"),
    ("muscle", "\u{1f4aa}", ":muscle:", "&#x1f4aa;", r"\U0001F4AA"),
    ("point_up", "\u{261d}\u{fe0f}", ":point_up:", "&#x261d;&#xfe0f;", r"\U0000261D\uFE0F"),
    ("point_right", "\u{1f449}", ":point_right:", "&#x1f449;", r"\U0001F449"),
    ("point_left", "\u{1f448}", ":point_left:", "&#x1f448;", r"\U0001F448"),
    ("fist", "\u{270a}", ":fist:", "&#x270a;", r"\U0000270A"),
    ("handshake", "\u{1f91d}", ":handshake:", "&#x1f91d;", r"\U0001F91D"),
    ("writing_hand", "\u{270d}\u{fe0f}", ":writing_hand:", "&#x270d;&#xfe0f;", r"\U0000270D\uFE0F"),
    ("eyes", "\u{1f440}", ":eyes:", "&#x1f440;", r"\U0001F440"),
    ("brain", "\u{1f9e0}", ":brain:", "&#x1f9e0;", r"\U0001F9E0"),
    // Hearts & symbols of emotion
    ("heart", "\u{2764}\u{fe0f}", ":heart:", "&#x2764;&#xfe0f;", r"\U00002764\uFE0F"),
    ("orange_heart", "\u{1f9e1}", ":orange_heart:", "&#x1f9e1;", r"\U0001F9E1"),
    ("yellow_heart", "\u{1f49b}", ":yellow_heart:", "&#x1f49b;", r"\U0001F49B"),
    ("green_heart", "\u{1f49a}", ":green_heart:", "&#x1f49a;", r"\U0001F49A"),
    ("blue_heart", "\u{1f499}", ":blue_heart:", "&#x1f499;", r"\U0001F499"),
    ("purple_heart", "\u{1f49c}", ":purple_heart:", "&#x1f49c;", r"\U0001F49C"),
    ("black_heart", "\u{1f5a4}", ":black_heart:", "&#x1f5a4;", r"\U0001F5A4"),
    ("broken_heart", "\u{1f494}", ":broken_heart:", "&#x1f494;", r"\U0001F494"),
    ("two_hearts", "\u{1f495}", ":two_hearts:", "&#x1f495;", r"\U0001F495"),
    ("sparkling_heart", "\u{1f496}", ":sparkling_heart:", "&#x1f496;", r"\U0001F496"),
    ("heartpulse", "\u{1f497}", ":heartpulse:", "&#x1f497;", r"\U0001F497"),
    ("kiss", "\u{1f48b}", ":kiss:", "&#x1f48b;", r"\U0001F48B"),
    ("hundred", "\u{1f4af}", ":hundred:", "&#x1f4af;", r"\U0001F4AF"),
    ("anger", "\u{1f4a2}", ":anger:", "&#x1f4a2;", r"\U0001F4A2"),
    ("boom", "\u{1f4a5}", ":boom:", "&#x1f4a5;", r"\U0001F4A5"),
    ("dizzy", "\u{1f4ab}", ":dizzy:", "&#x1f4ab;", r"\U0001F4AB"),
    ("zzz", "\u{1f4a4}", ":zzz:", "&#x1f4a4;", r"\U0001F4A4"),
    ("speech_balloon", "\u{1f4ac}", ":speech_balloon:", "&#x1f4ac;", r"\U0001F4AC"),
    // Animals
    ("dog", "\u{1f436}", ":dog:", "&#x1f436;", r"\U0001F436"),
    ("cat", "\u{1f431}", ":cat:", "&#x1f431;", r"\U0001F431"),
    ("mouse", "\u{1f42d}", ":mouse:", "&#x1f42d;", r"\U0001F42D"),
    ("rabbit", "\u{1f430}", ":rabbit:", "&#x1f430;", r"\U0001F430"),
    ("fox_face", "\u{1f98a}", ":fox_face:", "&#x1f98a;", r"\U0001F98A"),
    ("bear", "\u{1f43b}", ":bear:", "&#x1f43b;", r"\U0001F43B"),
    ("panda_face", "\u{1f43c}", ":panda_face:", "&#x1f43c;", r"\U0001F43C"),
    ("koala", "\u{1f428}", ":koala:", "&#x1f428;", r"\U0001F428"),
    ("tiger", "\u{1f42f}", ":tiger:", "&#x1f42f;", r"\U0001F42F"),
    ("lion", "\u{1f981}", ":lion:", "&#x1f981;", r"\U0001F981"),
    ("cow", "\u{1f42e}", ":cow:", "&#x1f42e;", r"\U0001F42E"),
    ("pig", "\u{1f437}", ":pig:", "&#x1f437;", r"\U0001F437"),
    ("frog", "\u{1f438}", ":frog:", "&#x1f438;", r"\U0001F438"),
    ("monkey_face", "\u{1f435}", ":monkey_face:", "&#x1f435;", r"\U0001F435"),
    ("chicken", "\u{1f414}", ":chicken:", "&#x1f414;", r"\U0001F414"),
    ("penguin", "\u{1f427}", ":penguin:", "&#x1f427;", r"\U0001F427"),
    ("bird", "\u{1f426}", ":bird:", "&#x1f426;", r"\U0001F426"),
    ("eagle", "\u{1f985}", ":eagle:", "&#x1f985;", r"\U0001F985"),
    ("owl", "\u{1f989}", ":owl:", "&#x1f989;", r"\U0001F989"),
    ("unicorn", "\u{1f984}", ":unicorn:", "&#x1f984;", r"\U0001F984"),
    ("bee", "\u{1f41d}", ":bee:", "&#x1f41d;", r"\U0001F41D"),
    ("butterfly", "\u{1f98b}", ":butterfly:", "&#x1f98b;", r"\U0001F98B"),
    ("snail", "\u{1f40c}", ":snail:", "&#x1f40c;", r"\U0001F40C"),
    ("turtle", "\u{1f422}", ":turtle:", "&#x1f422;", r"\U0001F422"),
    ("snake", "\u{1f40d}", ":snake:", "&#x1f40d;", r"\U0001F40D"),
    ("octopus", "\u{1f419}", ":octopus:", "&#x1f419;", r"\U0001F419"),
    ("fish", "\u{1f41f}", ":fish:", "&#x1f41f;", r"\U0001F41F"),
    ("dolphin", "\u{1f42c}", ":dolphin:", "&#x1f42c;", r"\U0001F42C"),
    ("whale", "\u{1f433}", ":whale:", "&#x1f433;", r"\U0001F433"),
    ("shark", "\u{1f988}", ":shark:", "&#x1f988;", r"\U0001F988"),
    ("spider", "\u{1f577}\u{fe0f}", ":spider:", "&#x1f577;&#xfe0f;", r"\U0001F577\uFE0F"),
    ("dragon", "\u{1f409}", ":dragon:", "&#x1f409;", r"\U0001F409"),
    // Nature
    ("rose", "\u{1f339}", ":rose:", "&#x1f339;", r"\U0001F339"),
    ("sunflower", "\u{1f33b}", ":sunflower:", "&#x1f33b;", r"\U0001F33B"),
    ("tulip", "\u{1f337}", ":tulip:", "&#x1f337;", r"\U0001F337"),
    ("cherry_blossom", "\u{1f338}", ":cherry_blossom:", "&#x1f338;", r"\U0001F338"),
    ("seedling", "\u{1f331}", ":seedling:", "&#x1f331;", r"\U0001F331"),
    ("evergreen_tree", "\u{1f332}", ":evergreen_tree:", "&#x1f332;", r"\U0001F332"),
    ("deciduous_tree", "\u{1f333}", ":deciduous_tree:", "&#x1f333;", r"\U0001F333"),
    ("palm_tree", "\u{1f334}", ":palm_tree:", "&#x1f334;", r"\U0001F334"),
    ("cactus", "\u{1f335}", ":cactus:", "&#x1f335;", r"\U0001F335"),
    ("four_leaf_clover", "\u{1f340}", ":four_leaf_clover:", "&#x1f340;", r"\U0001F340"),
    ("maple_leaf", "\u{1f341}", ":maple_leaf:", "&#x1f341;", r"\U0001F341"),
    ("fallen_leaf", "\u{1f342}", ":fallen_leaf:", "&#x1f342;", r"\U0001F342"),
    ("mushroom", "\u{1f344}", ":mushroom:", "&#x1f344;", r"\U0001F344"),
    ("sun", "\u{2600}\u{fe0f}", ":sun:", "&#x2600;&#xfe0f;", r"\U00002600\uFE0F"),
    ("moon", "\u{1f319}", ":moon:", "&#x1f319;", r"\U0001F319"),
    ("star", "\u{2b50}", ":star:", "&#x2b50;", r"\U00002B50"),
    ("star2", "\u{1f31f}", ":star2:", "&#x1f31f;", r"\U0001F31F"),
    ("sparkles", "\u{2728}", ":sparkles:", "&#x2728;", r"\U00002728"),
    ("zap", "\u{26a1}", ":zap:", "&#x26a1;", r"\U000026A1"),
    ("fire", "\u{1f525}", ":fire:", "&#x1f525;", r"\U0001F525"),
    ("rainbow", "\u{1f308}", ":rainbow:", "&#x1f308;", r"\U0001F308"),
    ("cloud", "\u{2601}\u{fe0f}", ":cloud:", "&#x2601;&#xfe0f;", r"\U00002601\uFE0F"),
    ("snowflake", "\u{2744}\u{fe0f}", ":snowflake:", "&#x2744;&#xfe0f;", r"\U00002744\uFE0F"),
    ("snowman", "\u{26c4}", ":snowman:", "&#x26c4;", r"\U000026C4"),
    ("droplet", "\u{1f4a7}", ":droplet:", "&#x1f4a7;", r"\U0001F4A7"),
    ("ocean", "\u{1f30a}", ":ocean:", "&#x1f30a;", r"\U0001F30A"),
    ("umbrella", "\u{2602}\u{fe0f}", ":umbrella:", "&#x2602;&#xfe0f;", r"\U00002602\uFE0F"),
    ("tornado", "\u{1f32a}\u{fe0f}", ":tornado:", "&#x1f32a;&#xfe0f;", r"\U0001F32A\uFE0F"),
    ("earth_africa", "\u{1f30d}", ":earth_africa:", "&#x1f30d;", r"\U0001F30D"),
    ("earth_americas", "\u{1f30e}", ":earth_americas:", "&#x1f30e;", r"\U0001F30E"),
    ("earth_asia", "\u{1f30f}", ":earth_asia:", "&#x1f30f;", r"\U0001F30F"),
    ("volcano", "\u{1f30b}", ":volcano:", "&#x1f30b;", r"\U0001F30B"),
    ("desert_island", "\u{1f3dd}\u{fe0f}", ":desert_island:", "&#x1f3dd;&#xfe0f;", r"\U0001F3DD\uFE0F"),
    ("mountain", "\u{26f0}\u{fe0f}", ":mountain:", "&#x26f0;&#xfe0f;", r"\U000026F0\uFE0F"),
    ("comet", "\u{2604}\u{fe0f}", ":comet:", "&#x2604;&#xfe0f;", r"\U00002604\uFE0F"),
    // Food & drink
    ("apple", "\u{1f34e}", ":apple:", "&#x1f34e;", r"\U0001F34E"),
    ("green_apple", "\u{1f34f}", ":green_apple:", "&#x1f34f;", r"\U0001F34F"),
    ("banana", "\u{1f34c}", ":banana:", "&#x1f34c;", r"\U0001F34C"),
    ("grapes", "\u{1f347}", ":grapes:", "&#x1f347;", r"\U0001F347"),
    ("watermelon", "\u{1f349}", ":watermelon:", "&#x1f349;", r"\U0001F349"),
    ("strawberry", "\u{1f353}", ":strawberry:", "&#x1f353;", r"\U0001F353"),
    ("cherries", "\u{1f352}", ":cherries:", "&#x1f352;", r"\U0001F352"),
    ("peach", "\u{1f351}", ":peach:", "&#x1f351;", r"\U0001F351"),
    ("pineapple", "\u{1f34d}", ":pineapple:", "&#x1f34d;", r"\U0001F34D"),
    ("avocado", "\u{1f951}", ":avocado:", "&#x1f951;", r"\U0001F951"),
    ("lemon", "\u{1f34b}", ":lemon:", "&#x1f34b;", r"\U0001F34B"),
    ("hot_pepper", "\u{1f336}\u{fe0f}", ":hot_pepper:", "&#x1f336;&#xfe0f;", r"\U0001F336\uFE0F"),
    ("carrot", "\u{1f955}", ":carrot:", "&#x1f955;", r"\U0001F955"),
    ("corn", "\u{1f33d}", ":corn:", "&#x1f33d;", r"\U0001F33D"),
    ("bread", "\u{1f35e}", ":bread:", "&#x1f35e;", r"\U0001F35E"),
    ("cheese", "\u{1f9c0}", ":cheese:", "&#x1f9c0;", r"\U0001F9C0"),
    ("hamburger", "\u{1f354}", ":hamburger:", "&#x1f354;", r"\U0001F354"),
    ("fries", "\u{1f35f}", ":fries:", "&#x1f35f;", r"\U0001F35F"),
    ("pizza", "\u{1f355}", ":pizza:", "&#x1f355;", r"\U0001F355"),
    ("hotdog", "\u{1f32d}", ":hotdog:", "&#x1f32d;", r"\U0001F32D"),
    ("taco", "\u{1f32e}", ":taco:", "&#x1f32e;", r"\U0001F32E"),
    ("burrito", "\u{1f32f}", ":burrito:", "&#x1f32f;", r"\U0001F32F"),
    ("sushi", "\u{1f363}", ":sushi:", "&#x1f363;", r"\U0001F363"),
    ("ramen", "\u{1f35c}", ":ramen:", "&#x1f35c;", r"\U0001F35C"),
    ("spaghetti", "\u{1f35d}", ":spaghetti:", "&#x1f35d;", r"\U0001F35D"),
    ("cake", "\u{1f370}", ":cake:", "&#x1f370;", r"\U0001F370"),
    ("birthday", "\u{1f382}", ":birthday:", "&#x1f382;", r"\U0001F382"),
    ("cookie", "\u{1f36a}", ":cookie:", "&#x1f36a;", r"\U0001F36A"),
    ("chocolate_bar", "\u{1f36b}", ":chocolate_bar:", "&#x1f36b;", r"\U0001F36B"),
    ("candy", "\u{1f36c}", ":candy:", "&#x1f36c;", r"\U0001F36C"),
    ("doughnut", "\u{1f369}", ":doughnut:", "&#x1f369;", r"\U0001F369"),
    ("icecream", "\u{1f366}", ":icecream:", "&#x1f366;", r"\U0001F366"),
    ("popcorn", "\u{1f37f}", ":popcorn:", "&#x1f37f;", r"\U0001F37F"),
    ("coffee", "\u{2615}", ":coffee:", "&#x2615;", r"\U00002615"),
    ("tea", "\u{1f375}", ":tea:", "&#x1f375;", r"\U0001F375"),
    ("beer", "\u{1f37a}", ":beer:", "&#x1f37a;", r"\U0001F37A"),
    ("beers", "\u{1f37b}", ":beers:", "&#x1f37b;", r"\U0001F37B"),
    ("wine_glass", "\u{1f377}", ":wine_glass:", "&#x1f377;", r"\U0001F377"),
    ("cocktail", "\u{1f378}", ":cocktail:", "&#x1f378;", r"\U0001F378"),
    ("champagne", "\u{1f37e}", ":champagne:", "&#x1f37e;", r"\U0001F37E"),
    ("tropical_drink", "\u{1f379}", ":tropical_drink:", "&#x1f379;", r"\U0001F379"),
    // Activities
    ("soccer", "\u{26bd}", ":soccer:", "&#x26bd;", r"\U000026BD"),
    ("basketball", "\u{1f3c0}", ":basketball:", "&#x1f3c0;", r"\U0001F3C0"),
    ("football", "\u{1f3c8}", ":football:", "&#x1f3c8;", r"\U0001F3C8"),
    ("baseball", "\u{26be}", ":baseball:", "&#x26be;", r"\U000026BE"),
    ("tennis", "\u{1f3be}", ":tennis:", "&#x1f3be;", r"\U0001F3BE"),
    ("trophy", "\u{1f3c6}", ":trophy:", "&#x1f3c6;", r"\U0001F3C6"),
    ("medal_sports", "\u{1f3c5}", ":medal_sports:", "&#x1f3c5;", r"\U0001F3C5"),
    ("video_game", "\u{1f3ae}", ":video_game:", "&#x1f3ae;", r"\U0001F3AE"),
    ("dart", "\u{1f3af}", ":dart:", "&#x1f3af;", r"\U0001F3AF"),
    ("game_die", "\u{1f3b2}", ":game_die:", "&#x1f3b2;", r"\U0001F3B2"),
    ("jigsaw", "\u{1f9e9}", ":jigsaw:", "&#x1f9e9;", r"\U0001F9E9"),
    ("art", "\u{1f3a8}", ":art:", "&#x1f3a8;", r"\U0001F3A8"),
    ("guitar", "\u{1f3b8}", ":guitar:", "&#x1f3b8;", r"\U0001F3B8"),
    ("microphone", "\u{1f399}\u{fe0f}", ":microphone:", "&#x1f399;&#xfe0f;", r"\U0001F399\uFE0F"),
    ("headphones", "\u{1f3a7}", ":headphones:", "&#x1f3a7;", r"\U0001F3A7"),
    ("musical_note", "\u{1f3b5}", ":musical_note:", "&#x1f3b5;", r"\U0001F3B5"),
    ("notes", "\u{1f3b6}", ":notes:", "&#x1f3b6;", r"\U0001F3B6"),
    ("tada", "\u{1f389}", ":tada:", "&#x1f389;", r"\U0001F389"),
    ("confetti_ball", "\u{1f38a}", ":confetti_ball:", "&#x1f38a;", r"\U0001F38A"),
    ("balloon", "\u{1f388}", ":balloon:", "&#x1f388;", r"\U0001F388"),
    ("gift", "\u{1f381}", ":gift:", "&#x1f381;", r"\U0001F381"),
    ("christmas_tree", "\u{1f384}", ":christmas_tree:", "&#x1f384;", r"\U0001F384"),
    ("jack_o_lantern", "\u{1f383}", ":jack_o_lantern:", "&#x1f383;", r"\U0001F383"),
    ("fireworks", "\u{1f386}", ":fireworks:", "&#x1f386;", r"\U0001F386"),
    // Travel & places
    ("car", "\u{1f697}", ":car:", "&#x1f697;", r"\U0001F697"),
    ("taxi", "\u{1f695}", ":taxi:", "&#x1f695;", r"\U0001F695"),
    ("bus", "\u{1f68c}", ":bus:", "&#x1f68c;", r"\U0001F68C"),
    ("racing_car", "\u{1f3ce}\u{fe0f}", ":racing_car:", "&#x1f3ce;&#xfe0f;", r"\U0001F3CE\uFE0F"),
    ("motorcycle", "\u{1f3cd}\u{fe0f}", ":motorcycle:", "&#x1f3cd;&#xfe0f;", r"\U0001F3CD\uFE0F"),
    ("scooter", "\u{1f6f5}", ":scooter:", "&#x1f6f5;", r"\U0001F6F5"),
    ("bicycle", "\u{1f6b2}", ":bicycle:", "&#x1f6b2;", r"\U0001F6B2"),
    ("steam_locomotive", "\u{1f682}", ":steam_locomotive:", "&#x1f682;", r"\U0001F682"),
    ("airplane", "\u{2708}\u{fe0f}", ":airplane:", "&#x2708;&#xfe0f;", r"\U00002708\uFE0F"),
    ("rocket", "\u{1f680}", ":rocket:", "&#x1f680;", r"\U0001F680"),
    ("helicopter", "\u{1f681}", ":helicopter:", "&#x1f681;", r"\U0001F681"),
    ("ship", "\u{1f6a2}", ":ship:", "&#x1f6a2;", r"\U0001F6A2"),
    ("sailboat", "\u{26f5}", ":sailboat:", "&#x26f5;", r"\U000026F5"),
    ("anchor", "\u{2693}", ":anchor:", "&#x2693;", r"\U00002693"),
    ("house", "\u{1f3e0}", ":house:", "&#x1f3e0;", r"\U0001F3E0"),
    ("office", "\u{1f3e2}", ":office:", "&#x1f3e2;", r"\U0001F3E2"),
    ("hospital", "\u{1f3e5}", ":hospital:", "&#x1f3e5;", r"\U0001F3E5"),
    ("school", "\u{1f3eb}", ":school:", "&#x1f3eb;", r"\U0001F3EB"),
    ("classical_building", "\u{1f3db}\u{fe0f}", ":classical_building:", "&#x1f3db;&#xfe0f;", r"\U0001F3DB\uFE0F"),
    ("stadium", "\u{1f3df}\u{fe0f}", ":stadium:", "&#x1f3df;&#xfe0f;", r"\U0001F3DF\uFE0F"),
    ("tent", "\u{26fa}", ":tent:", "&#x26fa;", r"\U000026FA"),
    ("statue_of_liberty", "\u{1f5fd}", ":statue_of_liberty:", "&#x1f5fd;", r"\U0001F5FD"),
    ("world_map", "\u{1f5fa}\u{fe0f}", ":world_map:", "&#x1f5fa;&#xfe0f;", r"\U0001F5FA\uFE0F"),
    ("construction", "\u{1f6a7}", ":construction:", "&#x1f6a7;", r"\U0001F6A7"),
    ("rotating_light", "\u{1f6a8}", ":rotating_light:", "&#x1f6a8;", r"\U0001F6A8"),
    // Objects
    ("computer", "\u{1f4bb}", ":computer:", "&#x1f4bb;", r"\U0001F4BB"),
    ("desktop_computer", "\u{1f5a5}\u{fe0f}", ":desktop_computer:", "&#x1f5a5;&#xfe0f;", r"\U0001F5A5\uFE0F"),
    ("keyboard", "\u{2328}\u{fe0f}", ":keyboard:", "&#x2328;&#xfe0f;", r"\U00002328\uFE0F"),
    ("computer_mouse", "\u{1f5b1}\u{fe0f}", ":computer_mouse:", "&#x1f5b1;&#xfe0f;", r"\U0001F5B1\uFE0F"),
    ("printer", "\u{1f5a8}\u{fe0f}", ":printer:", "&#x1f5a8;&#xfe0f;", r"\U0001F5A8\uFE0F"),
    ("iphone", "\u{1f4f1}", ":iphone:", "&#x1f4f1;", r"\U0001F4F1"),
    ("phone", "\u{260e}\u{fe0f}", ":phone:", "&#x260e;&#xfe0f;", r"\U0000260E\uFE0F"),
    ("floppy_disk", "\u{1f4be}", ":floppy_disk:", "&#x1f4be;", r"\U0001F4BE"),
    ("cd", "\u{1f4bf}", ":cd:", "&#x1f4bf;", r"\U0001F4BF"),
    ("camera", "\u{1f4f7}", ":camera:", "&#x1f4f7;", r"\U0001F4F7"),
    ("camera_flash", "\u{1f4f8}", ":camera_flash:", "&#x1f4f8;", r"\U0001F4F8"),
    ("movie_camera", "\u{1f3a5}", ":movie_camera:", "&#x1f3a5;", r"\U0001F3A5"),
    ("tv", "\u{1f4fa}", ":tv:", "&#x1f4fa;", r"\U0001F4FA"),
    ("bulb", "\u{1f4a1}", ":bulb:", "&#x1f4a1;", r"\U0001F4A1"),
    ("flashlight", "\u{1f526}", ":flashlight:", "&#x1f526;", r"\U0001F526"),
    ("battery", "\u{1f50b}", ":battery:", "&#x1f50b;", r"\U0001F50B"),
    ("electric_plug", "\u{1f50c}", ":electric_plug:", "&#x1f50c;", r"\U0001F50C"),
    ("books", "\u{1f4da}", ":books:", "&#x1f4da;", r"\U0001F4DA"),
    ("book", "\u{1f4d6}", ":book:", "&#x1f4d6;", r"\U0001F4D6"),
    ("memo", "\u{1f4dd}", ":memo:", "&#x1f4dd;", r"\U0001F4DD"),
    ("pencil2", "\u{270f}\u{fe0f}", ":pencil2:", "&#x270f;&#xfe0f;", r"\U0000270F\uFE0F"),
    ("pushpin", "\u{1f4cc}", ":pushpin:", "&#x1f4cc;", r"\U0001F4CC"),
    ("paperclip", "\u{1f4ce}", ":paperclip:", "&#x1f4ce;", r"\U0001F4CE"),
    ("scissors", "\u{2702}\u{fe0f}", ":scissors:", "&#x2702;&#xfe0f;", r"\U00002702\uFE0F"),
    ("calendar", "\u{1f4c5}", ":calendar:", "&#x1f4c5;", r"\U0001F4C5"),
    ("chart_with_upwards_trend", "\u{1f4c8}", ":chart_with_upwards_trend:", "&#x1f4c8;", r"\U0001F4C8"),
    ("clipboard", "\u{1f4cb}", ":clipboard:", "&#x1f4cb;", r"\U0001F4CB"),
    ("file_folder", "\u{1f4c1}", ":file_folder:", "&#x1f4c1;", r"\U0001F4C1"),
    ("wastebasket", "\u{1f5d1}\u{fe0f}", ":wastebasket:", "&#x1f5d1;&#xfe0f;", r"\U0001F5D1\uFE0F"),
    ("lock", "\u{1f512}", ":lock:", "&#x1f512;", r"\U0001F512"),
    ("unlock", "\u{1f513}", ":unlock:", "&#x1f513;", r"\U0001F513"),
    ("key", "\u{1f511}", ":key:", "&#x1f511;", r"\U0001F511"),
    ("hammer", "\u{1f528}", ":hammer:", "&#x1f528;", r"\U0001F528"),
    ("wrench", "\u{1f527}", ":wrench:", "&#x1f527;", r"\U0001F527"),
    ("gear", "\u{2699}\u{fe0f}", ":gear:", "&#x2699;&#xfe0f;", r"\U00002699\uFE0F"),
    ("link", "\u{1f517}", ":link:", "&#x1f517;", r"\U0001F517"),
    ("bomb", "\u{1f4a3}", ":bomb:", "&#x1f4a3;", r"\U0001F4A3"),
    ("gem", "\u{1f48e}", ":gem:", "&#x1f48e;", r"\U0001F48E"),
    ("moneybag", "\u{1f4b0}", ":moneybag:", "&#x1f4b0;", r"\U0001F4B0"),
    ("dollar", "\u{1f4b5}", ":dollar:", "&#x1f4b5;", r"\U0001F4B5"),
    ("credit_card", "\u{1f4b3}", ":credit_card:", "&#x1f4b3;", r"\U0001F4B3"),
    ("envelope", "\u{2709}\u{fe0f}", ":envelope:", "&#x2709;&#xfe0f;", r"\U00002709\uFE0F"),
    ("email", "\u{1f4e7}", ":email:", "&#x1f4e7;", r"\U0001F4E7"),
    ("package", "\u{1f4e6}", ":package:", "&#x1f4e6;", r"\U0001F4E6"),
    ("bell", "\u{1f514}", ":bell:", "&#x1f514;", r"\U0001F514"),
    ("mag", "\u{1f50d}", ":mag:", "&#x1f50d;", r"\U0001F50D"),
    ("hourglass", "\u{231b}", ":hourglass:", "&#x231b;", r"\U0000231B"),
    ("alarm_clock", "\u{23f0}", ":alarm_clock:", "&#x23f0;", r"\U000023F0"),
    ("stopwatch", "\u{23f1}\u{fe0f}", ":stopwatch:", "&#x23f1;&#xfe0f;", r"\U000023F1\uFE0F"),
    ("watch", "\u{231a}", ":watch:", "&#x231a;", r"\U0000231A"),
    ("pill", "\u{1f48a}", ":pill:", "&#x1f48a;", r"\U0001F48A"),
    ("syringe", "\u{1f489}", ":syringe:", "&#x1f489;", r"\U0001F489"),
    ("crown", "\u{1f451}", ":crown:", "&#x1f451;", r"\U0001F451"),
    ("eyeglasses", "\u{1f453}", ":eyeglasses:", "&#x1f453;", r"\U0001F453"),
    ("shirt", "\u{1f455}", ":shirt:", "&#x1f455;", r"\U0001F455"),
    ("jeans", "\u{1f456}", ":jeans:", "&#x1f456;", r"\U0001F456"),
    ("ring", "\u{1f48d}", ":ring:", "&#x1f48d;", r"\U0001F48D"),
    ("lipstick", "\u{1f484}", ":lipstick:", "&#x1f484;", r"\U0001F484"),
    ("briefcase", "\u{1f4bc}", ":briefcase:", "&#x1f4bc;", r"\U0001F4BC"),
    ("shopping_cart", "\u{1f6d2}", ":shopping_cart:", "&#x1f6d2;", r"\U0001F6D2"),
    ("toilet", "\u{1f6bd}", ":toilet:", "&#x1f6bd;", r"\U0001F6BD"),
    ("door", "\u{1f6aa}", ":door:", "&#x1f6aa;", r"\U0001F6AA"),
    // Symbols
    ("white_check_mark", "\u{2705}", ":white_check_mark:", "&#x2705;", r"\U00002705"),
    ("heavy_check_mark", "\u{2714}\u{fe0f}", ":heavy_check_mark:", "&#x2714;&#xfe0f;", r"\U00002714\uFE0F"),
    ("x", "\u{274c}", ":x:", "&#x274c;", r"\U0000274C"),
    ("warning", "\u{26a0}\u{fe0f}", ":warning:", "&#x26a0;&#xfe0f;", r"\U000026A0\uFE0F"),
    ("no_entry", "\u{26d4}", ":no_entry:", "&#x26d4;", r"\U000026D4"),
    ("question", "\u{2753}", ":question:", "&#x2753;", r"\U00002753"),
    ("exclamation", "\u{2757}", ":exclamation:", "&#x2757;", r"\U00002757"),
    ("bangbang", "\u{203c}\u{fe0f}", ":bangbang:", "&#x203c;&#xfe0f;", r"\U0000203C\uFE0F"),
    ("interrobang", "\u{2049}\u{fe0f}", ":interrobang:", "&#x2049;&#xfe0f;", r"\U00002049\uFE0F"),
    ("recycle", "\u{267b}\u{fe0f}", ":recycle:", "&#x267b;&#xfe0f;", r"\U0000267B\uFE0F"),
    ("infinity", "\u{267e}\u{fe0f}", ":infinity:", "&#x267e;&#xfe0f;", r"\U0000267E\uFE0F"),
    ("peace_symbol", "\u{262e}\u{fe0f}", ":peace_symbol:", "&#x262e;&#xfe0f;", r"\U0000262E\uFE0F"),
    ("yin_yang", "\u{262f}\u{fe0f}", ":yin_yang:", "&#x262f;&#xfe0f;", r"\U0000262F\uFE0F"),
    ("copyright", "\u{a9}\u{fe0f}", ":copyright:", "&#xa9;&#xfe0f;", r"\U000000A9\uFE0F"),
    ("registered", "\u{ae}\u{fe0f}", ":registered:", "&#xae;&#xfe0f;", r"\U000000AE\uFE0F"),
    ("tm", "\u{2122}\u{fe0f}", ":tm:", "&#x2122;&#xfe0f;", r"\U00002122\uFE0F"),
    ("information_source", "\u{2139}\u{fe0f}", ":information_source:", "&#x2139;&#xfe0f;", r"\U00002139\uFE0F"),
    ("arrow_right", "\u{27a1}\u{fe0f}", ":arrow_right:", "&#x27a1;&#xfe0f;", r"\U000027A1\uFE0F"),
    ("arrow_left", "\u{2b05}\u{fe0f}", ":arrow_left:", "&#x2b05;&#xfe0f;", r"\U00002B05\uFE0F"),
    ("arrow_up", "\u{2b06}\u{fe0f}", ":arrow_up:", "&#x2b06;&#xfe0f;", r"\U00002B06\uFE0F"),
    ("arrow_down", "\u{2b07}\u{fe0f}", ":arrow_down:", "&#x2b07;&#xfe0f;", r"\U00002B07\uFE0F"),
    ("new", "\u{1f195}", ":new:", "&#x1f195;", r"\U0001F195"),
    ("free", "\u{1f193}", ":free:", "&#x1f193;", r"\U0001F193"),
    ("sos", "\u{1f198}", ":sos:", "&#x1f198;", r"\U0001F198"),
    ("red_circle", "\u{1f534}", ":red_circle:", "&#x1f534;", r"\U0001F534"),
    ("large_blue_circle", "\u{1f535}", ":large_blue_circle:", "&#x1f535;", r"\U0001F535"),
    ("white_circle", "\u{26aa}", ":white_circle:", "&#x26aa;", r"\U000026AA"),
    ("black_circle", "\u{26ab}", ":black_circle:", "&#x26ab;", r"\U000026AB"),
    ("checkered_flag", "\u{1f3c1}", ":checkered_flag:", "&#x1f3c1;", r"\U0001F3C1"),
    ("triangular_flag_on_post", "\u{1f6a9}", ":triangular_flag_on_post:", "&#x1f6a9;", r"\U0001F6A9"),
    ("white_flag", "\u{1f3f3}\u{fe0f}", ":white_flag:", "&#x1f3f3;&#xfe0f;", r"\U0001F3F3\uFE0F"),
    // Flags
    ("flag_it", "\u{1f1ee}\u{1f1f9}", ":flag_it:", "&#x1f1ee;&#x1f1f9;", r"\U0001F1EE\U0001F1F9"),
    ("flag_fr", "\u{1f1eb}\u{1f1f7}", ":flag_fr:", "&#x1f1eb;&#x1f1f7;", r"\U0001F1EB\U0001F1F7"),
    ("flag_us", "\u{1f1fa}\u{1f1f8}", ":flag_us:", "&#x1f1fa;&#x1f1f8;", r"\U0001F1FA\U0001F1F8"),
    ("flag_co", "\u{1f1e8}\u{1f1f4}", ":flag_co:", "&#x1f1e8;&#x1f1f4;", r"\U0001F1E8\U0001F1F4"),
    ("flag_ar", "\u{1f1e6}\u{1f1f7}", ":flag_ar:", "&#x1f1e6;&#x1f1f7;", r"\U0001F1E6\U0001F1F7"),
    ("flag_mx", "\u{1f1f2}\u{1f1fd}", ":flag_mx:", "&#x1f1f2;&#x1f1fd;", r"\U0001F1F2\U0001F1FD"),
    ("flag_br", "\u{1f1e7}\u{1f1f7}", ":flag_br:", "&#x1f1e7;&#x1f1f7;", r"\U0001F1E7\U0001F1F7"),
    ("flag_es", "\u{1f1ea}\u{1f1f8}", ":flag_es:", "&#x1f1ea;&#x1f1f8;", r"\U0001F1EA\U0001F1F8"),
    ("flag_de", "\u{1f1e9}\u{1f1ea}", ":flag_de:", "&#x1f1e9;&#x1f1ea;", r"\U0001F1E9\U0001F1EA"),
    ("flag_gb", "\u{1f1ec}\u{1f1e7}", ":flag_gb:", "&#x1f1ec;&#x1f1e7;", r"\U0001F1EC\U0001F1E7"),
    ("flag_jp", "\u{1f1ef}\u{1f1f5}", ":flag_jp:", "&#x1f1ef;&#x1f1f5;", r"\U0001F1EF\U0001F1F5"),
    ("flag_ca", "\u{1f1e8}\u{1f1e6}", ":flag_ca:", "&#x1f1e8;&#x1f1e6;", r"\U0001F1E8\U0001F1E6"),
    ("flag_cl", "\u{1f1e8}\u{1f1f1}", ":flag_cl:", "&#x1f1e8;&#x1f1f1;", r"\U0001F1E8\U0001F1F1"),
];
