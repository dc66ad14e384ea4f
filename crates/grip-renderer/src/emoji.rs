//! Emoji shortcode table and substitution.
//!
//! Keys are complete shortcodes including both colons, named as on GitHub
//! (gemoji aliases, flags by country name or by two-letter code for the
//! original ten). Values are either the Unicode glyph or, for GitHub's custom
//! emojis, a site-relative image path.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Colon, one or more non-whitespace characters, colon.
static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\S+:").expect("invalid shortcode regex"));

static EMOJI: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // Smileys and emotion
    ":grinning:" => "😀",
    ":smiley:" => "😃",
    ":smile:" => "😄",
    ":grin:" => "😁",
    ":laughing:" => "😆",
    ":satisfied:" => "😆",
    ":sweat_smile:" => "😅",
    ":rofl:" => "🤣",
    ":joy:" => "😂",
    ":slightly_smiling_face:" => "🙂",
    ":upside_down_face:" => "🙃",
    ":melting_face:" => "🫠",
    ":wink:" => "😉",
    ":blush:" => "😊",
    ":innocent:" => "😇",
    ":smiling_face_with_three_hearts:" => "🥰",
    ":heart_eyes:" => "😍",
    ":star_struck:" => "🤩",
    ":kissing_heart:" => "😘",
    ":kissing:" => "😗",
    ":relaxed:" => "☺️",
    ":kissing_closed_eyes:" => "😚",
    ":kissing_smiling_eyes:" => "😙",
    ":smiling_face_with_tear:" => "🥲",
    ":yum:" => "😋",
    ":stuck_out_tongue:" => "😛",
    ":stuck_out_tongue_winking_eye:" => "😜",
    ":zany_face:" => "🤪",
    ":stuck_out_tongue_closed_eyes:" => "😝",
    ":money_mouth_face:" => "🤑",
    ":hugs:" => "🤗",
    ":hand_over_mouth:" => "🤭",
    ":face_with_open_eyes_and_hand_over_mouth:" => "🫢",
    ":face_with_peeking_eye:" => "🫣",
    ":shushing_face:" => "🤫",
    ":thinking:" => "🤔",
    ":saluting_face:" => "🫡",
    ":zipper_mouth_face:" => "🤐",
    ":raised_eyebrow:" => "🤨",
    ":neutral_face:" => "😐",
    ":expressionless:" => "😑",
    ":no_mouth:" => "😶",
    ":dotted_line_face:" => "🫥",
    ":face_in_clouds:" => "😶\u{200d}🌫️",
    ":smirk:" => "😏",
    ":unamused:" => "😒",
    ":roll_eyes:" => "🙄",
    ":grimacing:" => "😬",
    ":face_exhaling:" => "😮\u{200d}💨",
    ":lying_face:" => "🤥",
    ":shaking_face:" => "🫨",
    ":relieved:" => "😌",
    ":pensive:" => "😔",
    ":sleepy:" => "😪",
    ":drooling_face:" => "🤤",
    ":sleeping:" => "😴",
    ":mask:" => "😷",
    ":face_with_thermometer:" => "🤒",
    ":face_with_head_bandage:" => "🤕",
    ":nauseated_face:" => "🤢",
    ":vomiting_face:" => "🤮",
    ":sneezing_face:" => "🤧",
    ":hot_face:" => "🥵",
    ":cold_face:" => "🥶",
    ":woozy_face:" => "🥴",
    ":dizzy_face:" => "😵",
    ":face_with_spiral_eyes:" => "😵\u{200d}💫",
    ":exploding_head:" => "🤯",
    ":cowboy_hat_face:" => "🤠",
    ":partying_face:" => "🥳",
    ":disguised_face:" => "🥸",
    ":sunglasses:" => "😎",
    ":nerd_face:" => "🤓",
    ":monocle_face:" => "🧐",
    ":confused:" => "😕",
    ":face_with_diagonal_mouth:" => "🫤",
    ":worried:" => "😟",
    ":slightly_frowning_face:" => "🙁",
    ":frowning_face:" => "☹️",
    ":open_mouth:" => "😮",
    ":hushed:" => "😯",
    ":astonished:" => "😲",
    ":flushed:" => "😳",
    ":pleading_face:" => "🥺",
    ":face_holding_back_tears:" => "🥹",
    ":frowning:" => "😦",
    ":anguished:" => "😧",
    ":fearful:" => "😨",
    ":cold_sweat:" => "😰",
    ":disappointed_relieved:" => "😥",
    ":cry:" => "😢",
    ":sob:" => "😭",
    ":scream:" => "😱",
    ":confounded:" => "😖",
    ":persevere:" => "😣",
    ":disappointed:" => "😞",
    ":sweat:" => "😓",
    ":weary:" => "😩",
    ":tired_face:" => "😫",
    ":yawning_face:" => "🥱",
    ":triumph:" => "😤",
    ":rage:" => "😡",
    ":pout:" => "😡",
    ":angry:" => "😠",
    ":cursing_face:" => "🤬",
    ":smiling_imp:" => "😈",
    ":imp:" => "👿",
    ":skull:" => "💀",
    ":skull_and_crossbones:" => "☠️",
    ":hankey:" => "💩",
    ":poop:" => "💩",
    ":shit:" => "💩",
    ":clown_face:" => "🤡",
    ":japanese_ogre:" => "👹",
    ":japanese_goblin:" => "👺",
    ":ghost:" => "👻",
    ":alien:" => "👽",
    ":space_invader:" => "👾",
    ":robot:" => "🤖",
    ":smiley_cat:" => "😺",
    ":smile_cat:" => "😸",
    ":joy_cat:" => "😹",
    ":heart_eyes_cat:" => "😻",
    ":smirk_cat:" => "😼",
    ":kissing_cat:" => "😽",
    ":scream_cat:" => "🙀",
    ":crying_cat_face:" => "😿",
    ":pouting_cat:" => "😾",
    ":see_no_evil:" => "🙈",
    ":hear_no_evil:" => "🙉",
    ":speak_no_evil:" => "🙊",
    ":love_letter:" => "💌",
    ":cupid:" => "💘",
    ":gift_heart:" => "💝",
    ":sparkling_heart:" => "💖",
    ":heartpulse:" => "💗",
    ":heartbeat:" => "💓",
    ":revolving_hearts:" => "💞",
    ":two_hearts:" => "💕",
    ":heart_decoration:" => "💟",
    ":heavy_heart_exclamation:" => "❣️",
    ":broken_heart:" => "💔",
    ":heart_on_fire:" => "❤️\u{200d}🔥",
    ":mending_heart:" => "❤️\u{200d}🩹",
    ":heart:" => "❤️",
    ":pink_heart:" => "🩷",
    ":orange_heart:" => "🧡",
    ":yellow_heart:" => "💛",
    ":green_heart:" => "💚",
    ":blue_heart:" => "💙",
    ":light_blue_heart:" => "🩵",
    ":purple_heart:" => "💜",
    ":brown_heart:" => "🤎",
    ":black_heart:" => "🖤",
    ":grey_heart:" => "🩶",
    ":white_heart:" => "🤍",
    ":kiss:" => "💋",
    ":100:" => "💯",
    ":anger:" => "💢",
    ":boom:" => "💥",
    ":collision:" => "💥",
    ":dizzy:" => "💫",
    ":sweat_drops:" => "💦",
    ":dash:" => "💨",
    ":hole:" => "🕳️",
    ":speech_balloon:" => "💬",
    ":eye_speech_bubble:" => "👁️\u{200d}🗨️",
    ":left_speech_bubble:" => "🗨️",
    ":right_anger_bubble:" => "🗯️",
    ":thought_balloon:" => "💭",
    ":zzz:" => "💤",

    // People and body
    ":wave:" => "👋",
    ":raised_back_of_hand:" => "🤚",
    ":raised_hand_with_fingers_splayed:" => "🖐️",
    ":hand:" => "✋",
    ":raised_hand:" => "✋",
    ":vulcan_salute:" => "🖖",
    ":rightwards_hand:" => "🫱",
    ":leftwards_hand:" => "🫲",
    ":palm_down_hand:" => "🫳",
    ":palm_up_hand:" => "🫴",
    ":leftwards_pushing_hand:" => "🫷",
    ":rightwards_pushing_hand:" => "🫸",
    ":ok_hand:" => "👌",
    ":pinched_fingers:" => "🤌",
    ":pinching_hand:" => "🤏",
    ":v:" => "✌️",
    ":crossed_fingers:" => "🤞",
    ":hand_with_index_finger_and_thumb_crossed:" => "🫰",
    ":love_you_gesture:" => "🤟",
    ":metal:" => "🤘",
    ":call_me_hand:" => "🤙",
    ":point_left:" => "👈",
    ":point_right:" => "👉",
    ":point_up_2:" => "👆",
    ":middle_finger:" => "🖕",
    ":fu:" => "🖕",
    ":point_down:" => "👇",
    ":point_up:" => "☝️",
    ":index_pointing_at_the_viewer:" => "🫵",
    ":+1:" => "👍",
    ":thumbsup:" => "👍",
    ":-1:" => "👎",
    ":thumbsdown:" => "👎",
    ":fist_raised:" => "✊",
    ":fist:" => "✊",
    ":fist_oncoming:" => "👊",
    ":facepunch:" => "👊",
    ":punch:" => "👊",
    ":fist_left:" => "🤛",
    ":fist_right:" => "🤜",
    ":clap:" => "👏",
    ":raised_hands:" => "🙌",
    ":heart_hands:" => "🫶",
    ":open_hands:" => "👐",
    ":palms_up_together:" => "🤲",
    ":handshake:" => "🤝",
    ":pray:" => "🙏",
    ":writing_hand:" => "✍️",
    ":nail_care:" => "💅",
    ":selfie:" => "🤳",
    ":muscle:" => "💪",
    ":mechanical_arm:" => "🦾",
    ":mechanical_leg:" => "🦿",
    ":leg:" => "🦵",
    ":foot:" => "🦶",
    ":ear:" => "👂",
    ":ear_with_hearing_aid:" => "🦻",
    ":nose:" => "👃",
    ":brain:" => "🧠",
    ":anatomical_heart:" => "🫀",
    ":lungs:" => "🫁",
    ":tooth:" => "🦷",
    ":bone:" => "🦴",
    ":eyes:" => "👀",
    ":eye:" => "👁️",
    ":tongue:" => "👅",
    ":lips:" => "👄",
    ":biting_lip:" => "🫦",
    ":baby:" => "👶",
    ":child:" => "🧒",
    ":boy:" => "👦",
    ":girl:" => "👧",
    ":adult:" => "🧑",
    ":blond_haired_person:" => "👱",
    ":man:" => "👨",
    ":bearded_person:" => "🧔",
    ":man_beard:" => "🧔\u{200d}♂️",
    ":woman_beard:" => "🧔\u{200d}♀️",
    ":red_haired_man:" => "👨\u{200d}🦰",
    ":curly_haired_man:" => "👨\u{200d}🦱",
    ":white_haired_man:" => "👨\u{200d}🦳",
    ":bald_man:" => "👨\u{200d}🦲",
    ":woman:" => "👩",
    ":red_haired_woman:" => "👩\u{200d}🦰",
    ":person_red_hair:" => "🧑\u{200d}🦰",
    ":curly_haired_woman:" => "👩\u{200d}🦱",
    ":person_curly_hair:" => "🧑\u{200d}🦱",
    ":white_haired_woman:" => "👩\u{200d}🦳",
    ":person_white_hair:" => "🧑\u{200d}🦳",
    ":bald_woman:" => "👩\u{200d}🦲",
    ":person_bald:" => "🧑\u{200d}🦲",
    ":blond_haired_woman:" => "👱\u{200d}♀️",
    ":blonde_woman:" => "👱\u{200d}♀️",
    ":blond_haired_man:" => "👱\u{200d}♂️",
    ":blonde_man:" => "👱\u{200d}♂️",
    ":older_adult:" => "🧓",
    ":older_man:" => "👴",
    ":older_woman:" => "👵",
    ":frowning_person:" => "🙍",
    ":frowning_man:" => "🙍\u{200d}♂️",
    ":frowning_woman:" => "🙍\u{200d}♀️",
    ":pouting_face:" => "🙎",
    ":pouting_man:" => "🙎\u{200d}♂️",
    ":pouting_woman:" => "🙎\u{200d}♀️",
    ":no_good:" => "🙅",
    ":no_good_man:" => "🙅\u{200d}♂️",
    ":ng_man:" => "🙅\u{200d}♂️",
    ":no_good_woman:" => "🙅\u{200d}♀️",
    ":ng_woman:" => "🙅\u{200d}♀️",
    ":ok_person:" => "🙆",
    ":ok_man:" => "🙆\u{200d}♂️",
    ":ok_woman:" => "🙆\u{200d}♀️",
    ":tipping_hand_person:" => "💁",
    ":information_desk_person:" => "💁",
    ":tipping_hand_man:" => "💁\u{200d}♂️",
    ":sassy_man:" => "💁\u{200d}♂️",
    ":tipping_hand_woman:" => "💁\u{200d}♀️",
    ":sassy_woman:" => "💁\u{200d}♀️",
    ":raising_hand:" => "🙋",
    ":raising_hand_man:" => "🙋\u{200d}♂️",
    ":raising_hand_woman:" => "🙋\u{200d}♀️",
    ":deaf_person:" => "🧏",
    ":deaf_man:" => "🧏\u{200d}♂️",
    ":deaf_woman:" => "🧏\u{200d}♀️",
    ":bow:" => "🙇",
    ":bowing_man:" => "🙇\u{200d}♂️",
    ":bowing_woman:" => "🙇\u{200d}♀️",
    ":facepalm:" => "🤦",
    ":man_facepalming:" => "🤦\u{200d}♂️",
    ":woman_facepalming:" => "🤦\u{200d}♀️",
    ":shrug:" => "🤷",
    ":man_shrugging:" => "🤷\u{200d}♂️",
    ":woman_shrugging:" => "🤷\u{200d}♀️",
    ":health_worker:" => "🧑\u{200d}⚕️",
    ":man_health_worker:" => "👨\u{200d}⚕️",
    ":woman_health_worker:" => "👩\u{200d}⚕️",
    ":student:" => "🧑\u{200d}🎓",
    ":man_student:" => "👨\u{200d}🎓",
    ":woman_student:" => "👩\u{200d}🎓",
    ":teacher:" => "🧑\u{200d}🏫",
    ":man_teacher:" => "👨\u{200d}🏫",
    ":woman_teacher:" => "👩\u{200d}🏫",
    ":judge:" => "🧑\u{200d}⚖️",
    ":man_judge:" => "👨\u{200d}⚖️",
    ":woman_judge:" => "👩\u{200d}⚖️",
    ":farmer:" => "🧑\u{200d}🌾",
    ":man_farmer:" => "👨\u{200d}🌾",
    ":woman_farmer:" => "👩\u{200d}🌾",
    ":cook:" => "🧑\u{200d}🍳",
    ":man_cook:" => "👨\u{200d}🍳",
    ":woman_cook:" => "👩\u{200d}🍳",
    ":mechanic:" => "🧑\u{200d}🔧",
    ":man_mechanic:" => "👨\u{200d}🔧",
    ":woman_mechanic:" => "👩\u{200d}🔧",
    ":factory_worker:" => "🧑\u{200d}🏭",
    ":man_factory_worker:" => "👨\u{200d}🏭",
    ":woman_factory_worker:" => "👩\u{200d}🏭",
    ":office_worker:" => "🧑\u{200d}💼",
    ":man_office_worker:" => "👨\u{200d}💼",
    ":woman_office_worker:" => "👩\u{200d}💼",
    ":scientist:" => "🧑\u{200d}🔬",
    ":man_scientist:" => "👨\u{200d}🔬",
    ":woman_scientist:" => "👩\u{200d}🔬",
    ":technologist:" => "🧑\u{200d}💻",
    ":man_technologist:" => "👨\u{200d}💻",
    ":woman_technologist:" => "👩\u{200d}💻",
    ":singer:" => "🧑\u{200d}🎤",
    ":man_singer:" => "👨\u{200d}🎤",
    ":woman_singer:" => "👩\u{200d}🎤",
    ":artist:" => "🧑\u{200d}🎨",
    ":man_artist:" => "👨\u{200d}🎨",
    ":woman_artist:" => "👩\u{200d}🎨",
    ":pilot:" => "🧑\u{200d}✈️",
    ":man_pilot:" => "👨\u{200d}✈️",
    ":woman_pilot:" => "👩\u{200d}✈️",
    ":astronaut:" => "🧑\u{200d}🚀",
    ":man_astronaut:" => "👨\u{200d}🚀",
    ":woman_astronaut:" => "👩\u{200d}🚀",
    ":firefighter:" => "🧑\u{200d}🚒",
    ":man_firefighter:" => "👨\u{200d}🚒",
    ":woman_firefighter:" => "👩\u{200d}🚒",
    ":police_officer:" => "👮",
    ":cop:" => "👮",
    ":policeman:" => "👮\u{200d}♂️",
    ":policewoman:" => "👮\u{200d}♀️",
    ":detective:" => "🕵️",
    ":male_detective:" => "🕵️\u{200d}♂️",
    ":female_detective:" => "🕵️\u{200d}♀️",
    ":guard:" => "💂",
    ":guardsman:" => "💂\u{200d}♂️",
    ":guardswoman:" => "💂\u{200d}♀️",
    ":ninja:" => "🥷",
    ":construction_worker:" => "👷",
    ":construction_worker_man:" => "👷\u{200d}♂️",
    ":construction_worker_woman:" => "👷\u{200d}♀️",
    ":person_with_crown:" => "🫅",
    ":prince:" => "🤴",
    ":princess:" => "👸",
    ":person_with_turban:" => "👳",
    ":man_with_turban:" => "👳\u{200d}♂️",
    ":woman_with_turban:" => "👳\u{200d}♀️",
    ":man_with_gua_pi_mao:" => "👲",
    ":woman_with_headscarf:" => "🧕",
    ":person_in_tuxedo:" => "🤵",
    ":man_in_tuxedo:" => "🤵\u{200d}♂️",
    ":woman_in_tuxedo:" => "🤵\u{200d}♀️",
    ":person_with_veil:" => "👰",
    ":man_with_veil:" => "👰\u{200d}♂️",
    ":woman_with_veil:" => "👰\u{200d}♀️",
    ":bride_with_veil:" => "👰\u{200d}♀️",
    ":pregnant_woman:" => "🤰",
    ":pregnant_man:" => "🫃",
    ":pregnant_person:" => "🫄",
    ":breast_feeding:" => "🤱",
    ":woman_feeding_baby:" => "👩\u{200d}🍼",
    ":man_feeding_baby:" => "👨\u{200d}🍼",
    ":person_feeding_baby:" => "🧑\u{200d}🍼",
    ":angel:" => "👼",
    ":santa:" => "🎅",
    ":mrs_claus:" => "🤶",
    ":mx_claus:" => "🧑\u{200d}🎄",
    ":superhero:" => "🦸",
    ":superhero_man:" => "🦸\u{200d}♂️",
    ":superhero_woman:" => "🦸\u{200d}♀️",
    ":supervillain:" => "🦹",
    ":supervillain_man:" => "🦹\u{200d}♂️",
    ":supervillain_woman:" => "🦹\u{200d}♀️",
    ":mage:" => "🧙",
    ":mage_man:" => "🧙\u{200d}♂️",
    ":mage_woman:" => "🧙\u{200d}♀️",
    ":fairy:" => "🧚",
    ":fairy_man:" => "🧚\u{200d}♂️",
    ":fairy_woman:" => "🧚\u{200d}♀️",
    ":vampire:" => "🧛",
    ":vampire_man:" => "🧛\u{200d}♂️",
    ":vampire_woman:" => "🧛\u{200d}♀️",
    ":merperson:" => "🧜",
    ":merman:" => "🧜\u{200d}♂️",
    ":mermaid:" => "🧜\u{200d}♀️",
    ":elf:" => "🧝",
    ":elf_man:" => "🧝\u{200d}♂️",
    ":elf_woman:" => "🧝\u{200d}♀️",
    ":genie:" => "🧞",
    ":genie_man:" => "🧞\u{200d}♂️",
    ":genie_woman:" => "🧞\u{200d}♀️",
    ":zombie:" => "🧟",
    ":zombie_man:" => "🧟\u{200d}♂️",
    ":zombie_woman:" => "🧟\u{200d}♀️",
    ":troll:" => "🧌",
    ":massage:" => "💆",
    ":massage_man:" => "💆\u{200d}♂️",
    ":massage_woman:" => "💆\u{200d}♀️",
    ":haircut:" => "💇",
    ":haircut_man:" => "💇\u{200d}♂️",
    ":haircut_woman:" => "💇\u{200d}♀️",
    ":walking:" => "🚶",
    ":walking_man:" => "🚶\u{200d}♂️",
    ":walking_woman:" => "🚶\u{200d}♀️",
    ":standing_person:" => "🧍",
    ":standing_man:" => "🧍\u{200d}♂️",
    ":standing_woman:" => "🧍\u{200d}♀️",
    ":kneeling_person:" => "🧎",
    ":kneeling_man:" => "🧎\u{200d}♂️",
    ":kneeling_woman:" => "🧎\u{200d}♀️",
    ":person_with_probing_cane:" => "🧑\u{200d}🦯",
    ":man_with_probing_cane:" => "👨\u{200d}🦯",
    ":woman_with_probing_cane:" => "👩\u{200d}🦯",
    ":person_in_motorized_wheelchair:" => "🧑\u{200d}🦼",
    ":man_in_motorized_wheelchair:" => "👨\u{200d}🦼",
    ":woman_in_motorized_wheelchair:" => "👩\u{200d}🦼",
    ":person_in_manual_wheelchair:" => "🧑\u{200d}🦽",
    ":man_in_manual_wheelchair:" => "👨\u{200d}🦽",
    ":woman_in_manual_wheelchair:" => "👩\u{200d}🦽",
    ":runner:" => "🏃",
    ":running:" => "🏃",
    ":running_man:" => "🏃\u{200d}♂️",
    ":running_woman:" => "🏃\u{200d}♀️",
    ":woman_dancing:" => "💃",
    ":dancer:" => "💃",
    ":man_dancing:" => "🕺",
    ":business_suit_levitating:" => "🕴️",
    ":dancers:" => "👯",
    ":dancing_men:" => "👯\u{200d}♂️",
    ":dancing_women:" => "👯\u{200d}♀️",
    ":sauna_person:" => "🧖",
    ":sauna_man:" => "🧖\u{200d}♂️",
    ":sauna_woman:" => "🧖\u{200d}♀️",
    ":climbing:" => "🧗",
    ":climbing_man:" => "🧗\u{200d}♂️",
    ":climbing_woman:" => "🧗\u{200d}♀️",
    ":person_fencing:" => "🤺",
    ":horse_racing:" => "🏇",
    ":skier:" => "⛷️",
    ":snowboarder:" => "🏂",
    ":golfing:" => "🏌️",
    ":golfing_man:" => "🏌️\u{200d}♂️",
    ":golfing_woman:" => "🏌️\u{200d}♀️",
    ":surfer:" => "🏄",
    ":surfing_man:" => "🏄\u{200d}♂️",
    ":surfing_woman:" => "🏄\u{200d}♀️",
    ":rowboat:" => "🚣",
    ":rowing_man:" => "🚣\u{200d}♂️",
    ":rowing_woman:" => "🚣\u{200d}♀️",
    ":swimmer:" => "🏊",
    ":swimming_man:" => "🏊\u{200d}♂️",
    ":swimming_woman:" => "🏊\u{200d}♀️",
    ":bouncing_ball_person:" => "⛹️",
    ":bouncing_ball_man:" => "⛹️\u{200d}♂️",
    ":basketball_man:" => "⛹️\u{200d}♂️",
    ":bouncing_ball_woman:" => "⛹️\u{200d}♀️",
    ":basketball_woman:" => "⛹️\u{200d}♀️",
    ":weight_lifting:" => "🏋️",
    ":weight_lifting_man:" => "🏋️\u{200d}♂️",
    ":weight_lifting_woman:" => "🏋️\u{200d}♀️",
    ":bicyclist:" => "🚴",
    ":biking_man:" => "🚴\u{200d}♂️",
    ":biking_woman:" => "🚴\u{200d}♀️",
    ":mountain_bicyclist:" => "🚵",
    ":mountain_biking_man:" => "🚵\u{200d}♂️",
    ":mountain_biking_woman:" => "🚵\u{200d}♀️",
    ":cartwheeling:" => "🤸",
    ":man_cartwheeling:" => "🤸\u{200d}♂️",
    ":woman_cartwheeling:" => "🤸\u{200d}♀️",
    ":wrestling:" => "🤼",
    ":men_wrestling:" => "🤼\u{200d}♂️",
    ":women_wrestling:" => "🤼\u{200d}♀️",
    ":water_polo:" => "🤽",
    ":man_playing_water_polo:" => "🤽\u{200d}♂️",
    ":woman_playing_water_polo:" => "🤽\u{200d}♀️",
    ":handball_person:" => "🤾",
    ":man_playing_handball:" => "🤾\u{200d}♂️",
    ":woman_playing_handball:" => "🤾\u{200d}♀️",
    ":juggling_person:" => "🤹",
    ":man_juggling:" => "🤹\u{200d}♂️",
    ":woman_juggling:" => "🤹\u{200d}♀️",
    ":lotus_position:" => "🧘",
    ":lotus_position_man:" => "🧘\u{200d}♂️",
    ":lotus_position_woman:" => "🧘\u{200d}♀️",
    ":bath:" => "🛀",
    ":sleeping_bed:" => "🛌",
    ":people_holding_hands:" => "🧑\u{200d}🤝\u{200d}🧑",
    ":two_women_holding_hands:" => "👭",
    ":couple:" => "👫",
    ":two_men_holding_hands:" => "👬",
    ":couplekiss:" => "💏",
    ":couplekiss_man_woman:" => "👩\u{200d}❤️\u{200d}💋\u{200d}👨",
    ":couplekiss_man_man:" => "👨\u{200d}❤️\u{200d}💋\u{200d}👨",
    ":couplekiss_woman_woman:" => "👩\u{200d}❤️\u{200d}💋\u{200d}👩",
    ":couple_with_heart:" => "💑",
    ":couple_with_heart_woman_man:" => "👩\u{200d}❤️\u{200d}👨",
    ":couple_with_heart_man_man:" => "👨\u{200d}❤️\u{200d}👨",
    ":couple_with_heart_woman_woman:" => "👩\u{200d}❤️\u{200d}👩",
    ":family:" => "👪",
    ":family_man_woman_boy:" => "👨\u{200d}👩\u{200d}👦",
    ":family_man_woman_girl:" => "👨\u{200d}👩\u{200d}👧",
    ":family_man_woman_girl_boy:" => "👨\u{200d}👩\u{200d}👧\u{200d}👦",
    ":family_man_woman_boy_boy:" => "👨\u{200d}👩\u{200d}👦\u{200d}👦",
    ":family_man_woman_girl_girl:" => "👨\u{200d}👩\u{200d}👧\u{200d}👧",
    ":family_man_man_boy:" => "👨\u{200d}👨\u{200d}👦",
    ":family_man_man_girl:" => "👨\u{200d}👨\u{200d}👧",
    ":family_man_man_girl_boy:" => "👨\u{200d}👨\u{200d}👧\u{200d}👦",
    ":family_man_man_boy_boy:" => "👨\u{200d}👨\u{200d}👦\u{200d}👦",
    ":family_man_man_girl_girl:" => "👨\u{200d}👨\u{200d}👧\u{200d}👧",
    ":family_woman_woman_boy:" => "👩\u{200d}👩\u{200d}👦",
    ":family_woman_woman_girl:" => "👩\u{200d}👩\u{200d}👧",
    ":family_woman_woman_girl_boy:" => "👩\u{200d}👩\u{200d}👧\u{200d}👦",
    ":family_woman_woman_boy_boy:" => "👩\u{200d}👩\u{200d}👦\u{200d}👦",
    ":family_woman_woman_girl_girl:" => "👩\u{200d}👩\u{200d}👧\u{200d}👧",
    ":family_man_boy:" => "👨\u{200d}👦",
    ":family_man_boy_boy:" => "👨\u{200d}👦\u{200d}👦",
    ":family_man_girl:" => "👨\u{200d}👧",
    ":family_man_girl_boy:" => "👨\u{200d}👧\u{200d}👦",
    ":family_man_girl_girl:" => "👨\u{200d}👧\u{200d}👧",
    ":family_woman_boy:" => "👩\u{200d}👦",
    ":family_woman_boy_boy:" => "👩\u{200d}👦\u{200d}👦",
    ":family_woman_girl:" => "👩\u{200d}👧",
    ":family_woman_girl_boy:" => "👩\u{200d}👧\u{200d}👦",
    ":family_woman_girl_girl:" => "👩\u{200d}👧\u{200d}👧",
    ":speaking_head:" => "🗣️",
    ":bust_in_silhouette:" => "👤",
    ":busts_in_silhouette:" => "👥",
    ":people_hugging:" => "🫂",
    ":footprints:" => "👣",

    // Animals and nature
    ":monkey_face:" => "🐵",
    ":monkey:" => "🐒",
    ":gorilla:" => "🦍",
    ":orangutan:" => "🦧",
    ":dog:" => "🐶",
    ":dog2:" => "🐕",
    ":guide_dog:" => "🦮",
    ":service_dog:" => "🐕\u{200d}🦺",
    ":poodle:" => "🐩",
    ":wolf:" => "🐺",
    ":fox_face:" => "🦊",
    ":raccoon:" => "🦝",
    ":cat:" => "🐱",
    ":cat2:" => "🐈",
    ":black_cat:" => "🐈\u{200d}⬛",
    ":lion:" => "🦁",
    ":tiger:" => "🐯",
    ":tiger2:" => "🐅",
    ":leopard:" => "🐆",
    ":horse:" => "🐴",
    ":moose:" => "🫎",
    ":donkey:" => "🫏",
    ":racehorse:" => "🐎",
    ":unicorn:" => "🦄",
    ":zebra:" => "🦓",
    ":deer:" => "🦌",
    ":bison:" => "🦬",
    ":cow:" => "🐮",
    ":ox:" => "🐂",
    ":water_buffalo:" => "🐃",
    ":cow2:" => "🐄",
    ":pig:" => "🐷",
    ":pig2:" => "🐖",
    ":boar:" => "🐗",
    ":pig_nose:" => "🐽",
    ":ram:" => "🐏",
    ":sheep:" => "🐑",
    ":goat:" => "🐐",
    ":dromedary_camel:" => "🐪",
    ":camel:" => "🐫",
    ":llama:" => "🦙",
    ":giraffe:" => "🦒",
    ":elephant:" => "🐘",
    ":mammoth:" => "🦣",
    ":rhinoceros:" => "🦏",
    ":hippopotamus:" => "🦛",
    ":mouse:" => "🐭",
    ":mouse2:" => "🐁",
    ":rat:" => "🐀",
    ":hamster:" => "🐹",
    ":rabbit:" => "🐰",
    ":rabbit2:" => "🐇",
    ":chipmunk:" => "🐿️",
    ":beaver:" => "🦫",
    ":hedgehog:" => "🦔",
    ":bat:" => "🦇",
    ":bear:" => "🐻",
    ":polar_bear:" => "🐻\u{200d}❄️",
    ":koala:" => "🐨",
    ":panda_face:" => "🐼",
    ":sloth:" => "🦥",
    ":otter:" => "🦦",
    ":skunk:" => "🦨",
    ":kangaroo:" => "🦘",
    ":badger:" => "🦡",
    ":feet:" => "🐾",
    ":paw_prints:" => "🐾",
    ":turkey:" => "🦃",
    ":chicken:" => "🐔",
    ":rooster:" => "🐓",
    ":hatching_chick:" => "🐣",
    ":baby_chick:" => "🐤",
    ":hatched_chick:" => "🐥",
    ":bird:" => "🐦",
    ":penguin:" => "🐧",
    ":dove:" => "🕊️",
    ":eagle:" => "🦅",
    ":duck:" => "🦆",
    ":swan:" => "🦢",
    ":owl:" => "🦉",
    ":dodo:" => "🦤",
    ":feather:" => "🪶",
    ":flamingo:" => "🦩",
    ":peacock:" => "🦚",
    ":parrot:" => "🦜",
    ":wing:" => "🪽",
    ":black_bird:" => "🐦\u{200d}⬛",
    ":goose:" => "🪿",
    ":frog:" => "🐸",
    ":crocodile:" => "🐊",
    ":turtle:" => "🐢",
    ":lizard:" => "🦎",
    ":snake:" => "🐍",
    ":dragon_face:" => "🐲",
    ":dragon:" => "🐉",
    ":sauropod:" => "🦕",
    ":t-rex:" => "🦖",
    ":whale:" => "🐳",
    ":whale2:" => "🐋",
    ":dolphin:" => "🐬",
    ":flipper:" => "🐬",
    ":seal:" => "🦭",
    ":fish:" => "🐟",
    ":tropical_fish:" => "🐠",
    ":blowfish:" => "🐡",
    ":shark:" => "🦈",
    ":octopus:" => "🐙",
    ":shell:" => "🐚",
    ":coral:" => "🪸",
    ":jellyfish:" => "🪼",
    ":snail:" => "🐌",
    ":butterfly:" => "🦋",
    ":bug:" => "🐛",
    ":ant:" => "🐜",
    ":bee:" => "🐝",
    ":honeybee:" => "🐝",
    ":beetle:" => "🪲",
    ":lady_beetle:" => "🐞",
    ":cricket:" => "🦗",
    ":cockroach:" => "🪳",
    ":spider:" => "🕷️",
    ":spider_web:" => "🕸️",
    ":scorpion:" => "🦂",
    ":mosquito:" => "🦟",
    ":fly:" => "🪰",
    ":worm:" => "🪱",
    ":microbe:" => "🦠",
    ":bouquet:" => "💐",
    ":cherry_blossom:" => "🌸",
    ":white_flower:" => "💮",
    ":lotus:" => "🪷",
    ":rosette:" => "🏵️",
    ":rose:" => "🌹",
    ":wilted_flower:" => "🥀",
    ":hibiscus:" => "🌺",
    ":sunflower:" => "🌻",
    ":blossom:" => "🌼",
    ":tulip:" => "🌷",
    ":hyacinth:" => "🪻",
    ":seedling:" => "🌱",
    ":potted_plant:" => "🪴",
    ":evergreen_tree:" => "🌲",
    ":deciduous_tree:" => "🌳",
    ":palm_tree:" => "🌴",
    ":cactus:" => "🌵",
    ":ear_of_rice:" => "🌾",
    ":herb:" => "🌿",
    ":shamrock:" => "☘️",
    ":four_leaf_clover:" => "🍀",
    ":maple_leaf:" => "🍁",
    ":fallen_leaf:" => "🍂",
    ":leaves:" => "🍃",
    ":empty_nest:" => "🪹",
    ":nest_with_eggs:" => "🪺",
    ":mushroom:" => "🍄",

    // Food and drink
    ":grapes:" => "🍇",
    ":melon:" => "🍈",
    ":watermelon:" => "🍉",
    ":tangerine:" => "🍊",
    ":orange:" => "🍊",
    ":mandarin:" => "🍊",
    ":lemon:" => "🍋",
    ":banana:" => "🍌",
    ":pineapple:" => "🍍",
    ":mango:" => "🥭",
    ":apple:" => "🍎",
    ":green_apple:" => "🍏",
    ":pear:" => "🍐",
    ":peach:" => "🍑",
    ":cherries:" => "🍒",
    ":strawberry:" => "🍓",
    ":blueberries:" => "🫐",
    ":kiwi_fruit:" => "🥝",
    ":tomato:" => "🍅",
    ":olive:" => "🫒",
    ":coconut:" => "🥥",
    ":avocado:" => "🥑",
    ":eggplant:" => "🍆",
    ":potato:" => "🥔",
    ":carrot:" => "🥕",
    ":corn:" => "🌽",
    ":hot_pepper:" => "🌶️",
    ":bell_pepper:" => "🫑",
    ":cucumber:" => "🥒",
    ":leafy_green:" => "🥬",
    ":broccoli:" => "🥦",
    ":garlic:" => "🧄",
    ":onion:" => "🧅",
    ":peanuts:" => "🥜",
    ":beans:" => "🫘",
    ":chestnut:" => "🌰",
    ":ginger_root:" => "🫚",
    ":pea_pod:" => "🫛",
    ":bread:" => "🍞",
    ":croissant:" => "🥐",
    ":baguette_bread:" => "🥖",
    ":flatbread:" => "🫓",
    ":pretzel:" => "🥨",
    ":bagel:" => "🥯",
    ":pancakes:" => "🥞",
    ":waffle:" => "🧇",
    ":cheese:" => "🧀",
    ":meat_on_bone:" => "🍖",
    ":poultry_leg:" => "🍗",
    ":cut_of_meat:" => "🥩",
    ":bacon:" => "🥓",
    ":hamburger:" => "🍔",
    ":fries:" => "🍟",
    ":pizza:" => "🍕",
    ":hotdog:" => "🌭",
    ":sandwich:" => "🥪",
    ":taco:" => "🌮",
    ":burrito:" => "🌯",
    ":tamale:" => "🫔",
    ":stuffed_flatbread:" => "🥙",
    ":falafel:" => "🧆",
    ":egg:" => "🥚",
    ":fried_egg:" => "🍳",
    ":shallow_pan_of_food:" => "🥘",
    ":stew:" => "🍲",
    ":fondue:" => "🫕",
    ":bowl_with_spoon:" => "🥣",
    ":green_salad:" => "🥗",
    ":popcorn:" => "🍿",
    ":butter:" => "🧈",
    ":salt:" => "🧂",
    ":canned_food:" => "🥫",
    ":bento:" => "🍱",
    ":rice_cracker:" => "🍘",
    ":rice_ball:" => "🍙",
    ":rice:" => "🍚",
    ":curry:" => "🍛",
    ":ramen:" => "🍜",
    ":spaghetti:" => "🍝",
    ":sweet_potato:" => "🍠",
    ":oden:" => "🍢",
    ":sushi:" => "🍣",
    ":fried_shrimp:" => "🍤",
    ":fish_cake:" => "🍥",
    ":moon_cake:" => "🥮",
    ":dango:" => "🍡",
    ":dumpling:" => "🥟",
    ":fortune_cookie:" => "🥠",
    ":takeout_box:" => "🥡",
    ":crab:" => "🦀",
    ":lobster:" => "🦞",
    ":shrimp:" => "🦐",
    ":squid:" => "🦑",
    ":oyster:" => "🦪",
    ":icecream:" => "🍦",
    ":shaved_ice:" => "🍧",
    ":ice_cream:" => "🍨",
    ":doughnut:" => "🍩",
    ":cookie:" => "🍪",
    ":birthday:" => "🎂",
    ":cake:" => "🍰",
    ":cupcake:" => "🧁",
    ":pie:" => "🥧",
    ":chocolate_bar:" => "🍫",
    ":candy:" => "🍬",
    ":lollipop:" => "🍭",
    ":custard:" => "🍮",
    ":honey_pot:" => "🍯",
    ":baby_bottle:" => "🍼",
    ":milk_glass:" => "🥛",
    ":coffee:" => "☕",
    ":teapot:" => "🫖",
    ":tea:" => "🍵",
    ":sake:" => "🍶",
    ":champagne:" => "🍾",
    ":wine_glass:" => "🍷",
    ":cocktail:" => "🍸",
    ":tropical_drink:" => "🍹",
    ":beer:" => "🍺",
    ":beers:" => "🍻",
    ":clinking_glasses:" => "🥂",
    ":tumbler_glass:" => "🥃",
    ":pouring_liquid:" => "🫗",
    ":cup_with_straw:" => "🥤",
    ":bubble_tea:" => "🧋",
    ":beverage_box:" => "🧃",
    ":mate:" => "🧉",
    ":ice_cube:" => "🧊",
    ":chopsticks:" => "🥢",
    ":plate_with_cutlery:" => "🍽️",
    ":fork_and_knife:" => "🍴",
    ":spoon:" => "🥄",
    ":hocho:" => "🔪",
    ":knife:" => "🔪",
    ":jar:" => "🫙",
    ":amphora:" => "🏺",

    // Travel and places
    ":earth_africa:" => "🌍",
    ":earth_americas:" => "🌎",
    ":earth_asia:" => "🌏",
    ":globe_with_meridians:" => "🌐",
    ":world_map:" => "🗺️",
    ":japan:" => "🗾",
    ":compass:" => "🧭",
    ":mountain_snow:" => "🏔️",
    ":mountain:" => "⛰️",
    ":volcano:" => "🌋",
    ":mount_fuji:" => "🗻",
    ":camping:" => "🏕️",
    ":beach_umbrella:" => "🏖️",
    ":desert:" => "🏜️",
    ":desert_island:" => "🏝️",
    ":national_park:" => "🏞️",
    ":stadium:" => "🏟️",
    ":classical_building:" => "🏛️",
    ":building_construction:" => "🏗️",
    ":bricks:" => "🧱",
    ":rock:" => "🪨",
    ":wood:" => "🪵",
    ":hut:" => "🛖",
    ":houses:" => "🏘️",
    ":derelict_house:" => "🏚️",
    ":house:" => "🏠",
    ":house_with_garden:" => "🏡",
    ":office:" => "🏢",
    ":post_office:" => "🏣",
    ":european_post_office:" => "🏤",
    ":hospital:" => "🏥",
    ":bank:" => "🏦",
    ":hotel:" => "🏨",
    ":love_hotel:" => "🏩",
    ":convenience_store:" => "🏪",
    ":school:" => "🏫",
    ":department_store:" => "🏬",
    ":factory:" => "🏭",
    ":japanese_castle:" => "🏯",
    ":european_castle:" => "🏰",
    ":wedding:" => "💒",
    ":tokyo_tower:" => "🗼",
    ":statue_of_liberty:" => "🗽",
    ":church:" => "⛪",
    ":mosque:" => "🕌",
    ":hindu_temple:" => "🛕",
    ":synagogue:" => "🕍",
    ":shinto_shrine:" => "⛩️",
    ":kaaba:" => "🕋",
    ":fountain:" => "⛲",
    ":tent:" => "⛺",
    ":foggy:" => "🌁",
    ":night_with_stars:" => "🌃",
    ":cityscape:" => "🏙️",
    ":sunrise_over_mountains:" => "🌄",
    ":sunrise:" => "🌅",
    ":city_sunset:" => "🌆",
    ":city_sunrise:" => "🌇",
    ":bridge_at_night:" => "🌉",
    ":hotsprings:" => "♨️",
    ":carousel_horse:" => "🎠",
    ":playground_slide:" => "🛝",
    ":ferris_wheel:" => "🎡",
    ":roller_coaster:" => "🎢",
    ":barber:" => "💈",
    ":circus_tent:" => "🎪",
    ":steam_locomotive:" => "🚂",
    ":railway_car:" => "🚃",
    ":bullettrain_side:" => "🚄",
    ":bullettrain_front:" => "🚅",
    ":train2:" => "🚆",
    ":metro:" => "🚇",
    ":light_rail:" => "🚈",
    ":station:" => "🚉",
    ":tram:" => "🚊",
    ":monorail:" => "🚝",
    ":mountain_railway:" => "🚞",
    ":train:" => "🚋",
    ":bus:" => "🚌",
    ":oncoming_bus:" => "🚍",
    ":trolleybus:" => "🚎",
    ":minibus:" => "🚐",
    ":ambulance:" => "🚑",
    ":fire_engine:" => "🚒",
    ":police_car:" => "🚓",
    ":oncoming_police_car:" => "🚔",
    ":taxi:" => "🚕",
    ":oncoming_taxi:" => "🚖",
    ":car:" => "🚗",
    ":red_car:" => "🚗",
    ":oncoming_automobile:" => "🚘",
    ":blue_car:" => "🚙",
    ":pickup_truck:" => "🛻",
    ":truck:" => "🚚",
    ":articulated_lorry:" => "🚛",
    ":tractor:" => "🚜",
    ":racing_car:" => "🏎️",
    ":motorcycle:" => "🏍️",
    ":motor_scooter:" => "🛵",
    ":manual_wheelchair:" => "🦽",
    ":motorized_wheelchair:" => "🦼",
    ":auto_rickshaw:" => "🛺",
    ":bike:" => "🚲",
    ":kick_scooter:" => "🛴",
    ":skateboard:" => "🛹",
    ":roller_skate:" => "🛼",
    ":busstop:" => "🚏",
    ":motorway:" => "🛣️",
    ":railway_track:" => "🛤️",
    ":oil_drum:" => "🛢️",
    ":fuelpump:" => "⛽",
    ":wheel:" => "🛞",
    ":rotating_light:" => "🚨",
    ":traffic_light:" => "🚥",
    ":vertical_traffic_light:" => "🚦",
    ":stop_sign:" => "🛑",
    ":construction:" => "🚧",
    ":anchor:" => "⚓",
    ":ring_buoy:" => "🛟",
    ":boat:" => "⛵",
    ":sailboat:" => "⛵",
    ":canoe:" => "🛶",
    ":speedboat:" => "🚤",
    ":passenger_ship:" => "🛳️",
    ":ferry:" => "⛴️",
    ":motor_boat:" => "🛥️",
    ":ship:" => "🚢",
    ":airplane:" => "✈️",
    ":small_airplane:" => "🛩️",
    ":flight_departure:" => "🛫",
    ":flight_arrival:" => "🛬",
    ":parachute:" => "🪂",
    ":seat:" => "💺",
    ":helicopter:" => "🚁",
    ":suspension_railway:" => "🚟",
    ":mountain_cableway:" => "🚠",
    ":aerial_tramway:" => "🚡",
    ":artificial_satellite:" => "🛰️",
    ":rocket:" => "🚀",
    ":flying_saucer:" => "🛸",
    ":bellhop_bell:" => "🛎️",
    ":luggage:" => "🧳",
    ":hourglass:" => "⌛",
    ":hourglass_flowing_sand:" => "⏳",
    ":watch:" => "⌚",
    ":alarm_clock:" => "⏰",
    ":stopwatch:" => "⏱️",
    ":timer_clock:" => "⏲️",
    ":mantelpiece_clock:" => "🕰️",
    ":clock12:" => "🕛",
    ":clock1230:" => "🕧",
    ":clock1:" => "🕐",
    ":clock130:" => "🕜",
    ":clock2:" => "🕑",
    ":clock230:" => "🕝",
    ":clock3:" => "🕒",
    ":clock330:" => "🕞",
    ":clock4:" => "🕓",
    ":clock430:" => "🕟",
    ":clock5:" => "🕔",
    ":clock530:" => "🕠",
    ":clock6:" => "🕕",
    ":clock630:" => "🕡",
    ":clock7:" => "🕖",
    ":clock730:" => "🕢",
    ":clock8:" => "🕗",
    ":clock830:" => "🕣",
    ":clock9:" => "🕘",
    ":clock930:" => "🕤",
    ":clock10:" => "🕙",
    ":clock1030:" => "🕥",
    ":clock11:" => "🕚",
    ":clock1130:" => "🕦",
    ":new_moon:" => "🌑",
    ":waxing_crescent_moon:" => "🌒",
    ":first_quarter_moon:" => "🌓",
    ":moon:" => "🌔",
    ":waxing_gibbous_moon:" => "🌔",
    ":full_moon:" => "🌕",
    ":waning_gibbous_moon:" => "🌖",
    ":last_quarter_moon:" => "🌗",
    ":waning_crescent_moon:" => "🌘",
    ":crescent_moon:" => "🌙",
    ":new_moon_with_face:" => "🌚",
    ":first_quarter_moon_with_face:" => "🌛",
    ":last_quarter_moon_with_face:" => "🌜",
    ":thermometer:" => "🌡️",
    ":sunny:" => "☀️",
    ":full_moon_with_face:" => "🌝",
    ":sun_with_face:" => "🌞",
    ":ringed_planet:" => "🪐",
    ":star:" => "⭐",
    ":star2:" => "🌟",
    ":stars:" => "🌠",
    ":milky_way:" => "🌌",
    ":cloud:" => "☁️",
    ":partly_sunny:" => "⛅",
    ":cloud_with_lightning_and_rain:" => "⛈️",
    ":sun_behind_small_cloud:" => "🌤️",
    ":sun_behind_large_cloud:" => "🌥️",
    ":sun_behind_rain_cloud:" => "🌦️",
    ":cloud_with_rain:" => "🌧️",
    ":cloud_with_snow:" => "🌨️",
    ":cloud_with_lightning:" => "🌩️",
    ":tornado:" => "🌪️",
    ":fog:" => "🌫️",
    ":wind_face:" => "🌬️",
    ":cyclone:" => "🌀",
    ":rainbow:" => "🌈",
    ":closed_umbrella:" => "🌂",
    ":open_umbrella:" => "☂️",
    ":umbrella:" => "☔",
    ":parasol_on_ground:" => "⛱️",
    ":zap:" => "⚡",
    ":snowflake:" => "❄️",
    ":snowman_with_snow:" => "☃️",
    ":snowman:" => "⛄",
    ":comet:" => "☄️",
    ":fire:" => "🔥",
    ":droplet:" => "💧",
    ":ocean:" => "🌊",

    // Activities
    ":jack_o_lantern:" => "🎃",
    ":christmas_tree:" => "🎄",
    ":fireworks:" => "🎆",
    ":sparkler:" => "🎇",
    ":firecracker:" => "🧨",
    ":sparkles:" => "✨",
    ":balloon:" => "🎈",
    ":tada:" => "🎉",
    ":confetti_ball:" => "🎊",
    ":tanabata_tree:" => "🎋",
    ":bamboo:" => "🎍",
    ":dolls:" => "🎎",
    ":flags:" => "🎏",
    ":wind_chime:" => "🎐",
    ":rice_scene:" => "🎑",
    ":red_envelope:" => "🧧",
    ":ribbon:" => "🎀",
    ":gift:" => "🎁",
    ":reminder_ribbon:" => "🎗️",
    ":tickets:" => "🎟️",
    ":ticket:" => "🎫",
    ":medal_military:" => "🎖️",
    ":trophy:" => "🏆",
    ":medal_sports:" => "🏅",
    ":1st_place_medal:" => "🥇",
    ":2nd_place_medal:" => "🥈",
    ":3rd_place_medal:" => "🥉",
    ":soccer:" => "⚽",
    ":baseball:" => "⚾",
    ":softball:" => "🥎",
    ":basketball:" => "🏀",
    ":volleyball:" => "🏐",
    ":football:" => "🏈",
    ":rugby_football:" => "🏉",
    ":tennis:" => "🎾",
    ":flying_disc:" => "🥏",
    ":bowling:" => "🎳",
    ":cricket_game:" => "🏏",
    ":field_hockey:" => "🏑",
    ":ice_hockey:" => "🏒",
    ":lacrosse:" => "🥍",
    ":ping_pong:" => "🏓",
    ":badminton:" => "🏸",
    ":boxing_glove:" => "🥊",
    ":martial_arts_uniform:" => "🥋",
    ":goal_net:" => "🥅",
    ":golf:" => "⛳",
    ":ice_skate:" => "⛸️",
    ":fishing_pole_and_fish:" => "🎣",
    ":diving_mask:" => "🤿",
    ":running_shirt_with_sash:" => "🎽",
    ":ski:" => "🎿",
    ":sled:" => "🛷",
    ":curling_stone:" => "🥌",
    ":dart:" => "🎯",
    ":yo_yo:" => "🪀",
    ":kite:" => "🪁",
    ":gun:" => "🔫",
    ":8ball:" => "🎱",
    ":crystal_ball:" => "🔮",
    ":magic_wand:" => "🪄",
    ":video_game:" => "🎮",
    ":joystick:" => "🕹️",
    ":slot_machine:" => "🎰",
    ":game_die:" => "🎲",
    ":jigsaw:" => "🧩",
    ":teddy_bear:" => "🧸",
    ":pinata:" => "🪅",
    ":mirror_ball:" => "🪩",
    ":nesting_dolls:" => "🪆",
    ":spades:" => "♠️",
    ":hearts:" => "♥️",
    ":diamonds:" => "♦️",
    ":clubs:" => "♣️",
    ":chess_pawn:" => "♟️",
    ":black_joker:" => "🃏",
    ":mahjong:" => "🀄",
    ":flower_playing_cards:" => "🎴",
    ":performing_arts:" => "🎭",
    ":framed_picture:" => "🖼️",
    ":art:" => "🎨",
    ":thread:" => "🧵",
    ":sewing_needle:" => "🪡",
    ":yarn:" => "🧶",
    ":knot:" => "🪢",

    // Objects
    ":eyeglasses:" => "👓",
    ":dark_sunglasses:" => "🕶️",
    ":goggles:" => "🥽",
    ":lab_coat:" => "🥼",
    ":safety_vest:" => "🦺",
    ":necktie:" => "👔",
    ":shirt:" => "👕",
    ":tshirt:" => "👕",
    ":jeans:" => "👖",
    ":scarf:" => "🧣",
    ":gloves:" => "🧤",
    ":coat:" => "🧥",
    ":socks:" => "🧦",
    ":dress:" => "👗",
    ":kimono:" => "👘",
    ":sari:" => "🥻",
    ":one_piece_swimsuit:" => "🩱",
    ":swim_brief:" => "🩲",
    ":shorts:" => "🩳",
    ":bikini:" => "👙",
    ":womans_clothes:" => "👚",
    ":folding_hand_fan:" => "🪭",
    ":purse:" => "👛",
    ":handbag:" => "👜",
    ":pouch:" => "👝",
    ":shopping:" => "🛍️",
    ":school_satchel:" => "🎒",
    ":thong_sandal:" => "🩴",
    ":mans_shoe:" => "👞",
    ":shoe:" => "👞",
    ":athletic_shoe:" => "👟",
    ":hiking_boot:" => "🥾",
    ":flat_shoe:" => "🥿",
    ":high_heel:" => "👠",
    ":sandal:" => "👡",
    ":ballet_shoes:" => "🩰",
    ":boot:" => "👢",
    ":hair_pick:" => "🪮",
    ":crown:" => "👑",
    ":womans_hat:" => "👒",
    ":tophat:" => "🎩",
    ":mortar_board:" => "🎓",
    ":billed_cap:" => "🧢",
    ":military_helmet:" => "🪖",
    ":rescue_worker_helmet:" => "⛑️",
    ":prayer_beads:" => "📿",
    ":lipstick:" => "💄",
    ":ring:" => "💍",
    ":gem:" => "💎",
    ":mute:" => "🔇",
    ":speaker:" => "🔈",
    ":sound:" => "🔉",
    ":loud_sound:" => "🔊",
    ":loudspeaker:" => "📢",
    ":mega:" => "📣",
    ":postal_horn:" => "📯",
    ":bell:" => "🔔",
    ":no_bell:" => "🔕",
    ":musical_score:" => "🎼",
    ":musical_note:" => "🎵",
    ":notes:" => "🎶",
    ":studio_microphone:" => "🎙️",
    ":level_slider:" => "🎚️",
    ":control_knobs:" => "🎛️",
    ":microphone:" => "🎤",
    ":headphones:" => "🎧",
    ":radio:" => "📻",
    ":saxophone:" => "🎷",
    ":accordion:" => "🪗",
    ":guitar:" => "🎸",
    ":musical_keyboard:" => "🎹",
    ":trumpet:" => "🎺",
    ":violin:" => "🎻",
    ":banjo:" => "🪕",
    ":drum:" => "🥁",
    ":long_drum:" => "🪘",
    ":maracas:" => "🪇",
    ":flute:" => "🪈",
    ":iphone:" => "📱",
    ":calling:" => "📲",
    ":phone:" => "☎️",
    ":telephone:" => "☎️",
    ":telephone_receiver:" => "📞",
    ":pager:" => "📟",
    ":fax:" => "📠",
    ":battery:" => "🔋",
    ":low_battery:" => "🪫",
    ":electric_plug:" => "🔌",
    ":computer:" => "💻",
    ":desktop_computer:" => "🖥️",
    ":printer:" => "🖨️",
    ":keyboard:" => "⌨️",
    ":computer_mouse:" => "🖱️",
    ":trackball:" => "🖲️",
    ":minidisc:" => "💽",
    ":floppy_disk:" => "💾",
    ":cd:" => "💿",
    ":dvd:" => "📀",
    ":abacus:" => "🧮",
    ":movie_camera:" => "🎥",
    ":film_strip:" => "🎞️",
    ":film_projector:" => "📽️",
    ":clapper:" => "🎬",
    ":tv:" => "📺",
    ":camera:" => "📷",
    ":camera_flash:" => "📸",
    ":video_camera:" => "📹",
    ":vhs:" => "📼",
    ":mag:" => "🔍",
    ":mag_right:" => "🔎",
    ":candle:" => "🕯️",
    ":bulb:" => "💡",
    ":flashlight:" => "🔦",
    ":izakaya_lantern:" => "🏮",
    ":lantern:" => "🏮",
    ":diya_lamp:" => "🪔",
    ":notebook_with_decorative_cover:" => "📔",
    ":closed_book:" => "📕",
    ":book:" => "📖",
    ":open_book:" => "📖",
    ":green_book:" => "📗",
    ":blue_book:" => "📘",
    ":orange_book:" => "📙",
    ":books:" => "📚",
    ":notebook:" => "📓",
    ":ledger:" => "📒",
    ":page_with_curl:" => "📃",
    ":scroll:" => "📜",
    ":page_facing_up:" => "📄",
    ":newspaper:" => "📰",
    ":newspaper_roll:" => "🗞️",
    ":bookmark_tabs:" => "📑",
    ":bookmark:" => "🔖",
    ":label:" => "🏷️",
    ":moneybag:" => "💰",
    ":coin:" => "🪙",
    ":yen:" => "💴",
    ":dollar:" => "💵",
    ":euro:" => "💶",
    ":pound:" => "💷",
    ":money_with_wings:" => "💸",
    ":credit_card:" => "💳",
    ":receipt:" => "🧾",
    ":chart:" => "💹",
    ":envelope:" => "✉️",
    ":email:" => "📧",
    ":e-mail:" => "📧",
    ":incoming_envelope:" => "📨",
    ":envelope_with_arrow:" => "📩",
    ":outbox_tray:" => "📤",
    ":inbox_tray:" => "📥",
    ":package:" => "📦",
    ":mailbox:" => "📫",
    ":mailbox_closed:" => "📪",
    ":mailbox_with_mail:" => "📬",
    ":mailbox_with_no_mail:" => "📭",
    ":postbox:" => "📮",
    ":ballot_box:" => "🗳️",
    ":pencil2:" => "✏️",
    ":black_nib:" => "✒️",
    ":fountain_pen:" => "🖋️",
    ":pen:" => "🖊️",
    ":paintbrush:" => "🖌️",
    ":crayon:" => "🖍️",
    ":memo:" => "📝",
    ":pencil:" => "📝",
    ":briefcase:" => "💼",
    ":file_folder:" => "📁",
    ":open_file_folder:" => "📂",
    ":card_index_dividers:" => "🗂️",
    ":date:" => "📅",
    ":calendar:" => "📆",
    ":spiral_notepad:" => "🗒️",
    ":spiral_calendar:" => "🗓️",
    ":card_index:" => "📇",
    ":chart_with_upwards_trend:" => "📈",
    ":chart_with_downwards_trend:" => "📉",
    ":bar_chart:" => "📊",
    ":clipboard:" => "📋",
    ":pushpin:" => "📌",
    ":round_pushpin:" => "📍",
    ":paperclip:" => "📎",
    ":paperclips:" => "🖇️",
    ":straight_ruler:" => "📏",
    ":triangular_ruler:" => "📐",
    ":scissors:" => "✂️",
    ":card_file_box:" => "🗃️",
    ":file_cabinet:" => "🗄️",
    ":wastebasket:" => "🗑️",
    ":lock:" => "🔒",
    ":unlock:" => "🔓",
    ":lock_with_ink_pen:" => "🔏",
    ":closed_lock_with_key:" => "🔐",
    ":key:" => "🔑",
    ":old_key:" => "🗝️",
    ":hammer:" => "🔨",
    ":axe:" => "🪓",
    ":pick:" => "⛏️",
    ":hammer_and_pick:" => "⚒️",
    ":hammer_and_wrench:" => "🛠️",
    ":dagger:" => "🗡️",
    ":crossed_swords:" => "⚔️",
    ":bomb:" => "💣",
    ":boomerang:" => "🪃",
    ":bow_and_arrow:" => "🏹",
    ":shield:" => "🛡️",
    ":carpentry_saw:" => "🪚",
    ":wrench:" => "🔧",
    ":screwdriver:" => "🪛",
    ":nut_and_bolt:" => "🔩",
    ":gear:" => "⚙️",
    ":clamp:" => "🗜️",
    ":balance_scale:" => "⚖️",
    ":probing_cane:" => "🦯",
    ":link:" => "🔗",
    ":chains:" => "⛓️",
    ":hook:" => "🪝",
    ":toolbox:" => "🧰",
    ":magnet:" => "🧲",
    ":ladder:" => "🪜",
    ":alembic:" => "⚗️",
    ":test_tube:" => "🧪",
    ":petri_dish:" => "🧫",
    ":dna:" => "🧬",
    ":microscope:" => "🔬",
    ":telescope:" => "🔭",
    ":satellite:" => "📡",
    ":syringe:" => "💉",
    ":drop_of_blood:" => "🩸",
    ":pill:" => "💊",
    ":adhesive_bandage:" => "🩹",
    ":crutch:" => "🩼",
    ":stethoscope:" => "🩺",
    ":x_ray:" => "🩻",
    ":door:" => "🚪",
    ":elevator:" => "🛗",
    ":mirror:" => "🪞",
    ":window:" => "🪟",
    ":bed:" => "🛏️",
    ":couch_and_lamp:" => "🛋️",
    ":chair:" => "🪑",
    ":toilet:" => "🚽",
    ":plunger:" => "🪠",
    ":shower:" => "🚿",
    ":bathtub:" => "🛁",
    ":mouse_trap:" => "🪤",
    ":razor:" => "🪒",
    ":lotion_bottle:" => "🧴",
    ":safety_pin:" => "🧷",
    ":broom:" => "🧹",
    ":basket:" => "🧺",
    ":roll_of_paper:" => "🧻",
    ":bucket:" => "🪣",
    ":soap:" => "🧼",
    ":bubbles:" => "🫧",
    ":toothbrush:" => "🪥",
    ":sponge:" => "🧽",
    ":fire_extinguisher:" => "🧯",
    ":shopping_cart:" => "🛒",
    ":smoking:" => "🚬",
    ":coffin:" => "⚰️",
    ":headstone:" => "🪦",
    ":funeral_urn:" => "⚱️",
    ":nazar_amulet:" => "🧿",
    ":hamsa:" => "🪬",
    ":moyai:" => "🗿",
    ":placard:" => "🪧",
    ":identification_card:" => "🪪",

    // Symbols
    ":atm:" => "🏧",
    ":put_litter_in_its_place:" => "🚮",
    ":potable_water:" => "🚰",
    ":wheelchair:" => "♿",
    ":mens:" => "🚹",
    ":womens:" => "🚺",
    ":restroom:" => "🚻",
    ":baby_symbol:" => "🚼",
    ":wc:" => "🚾",
    ":passport_control:" => "🛂",
    ":customs:" => "🛃",
    ":baggage_claim:" => "🛄",
    ":left_luggage:" => "🛅",
    ":warning:" => "⚠️",
    ":children_crossing:" => "🚸",
    ":no_entry:" => "⛔",
    ":no_entry_sign:" => "🚫",
    ":no_bicycles:" => "🚳",
    ":no_smoking:" => "🚭",
    ":do_not_litter:" => "🚯",
    ":non-potable_water:" => "🚱",
    ":no_pedestrians:" => "🚷",
    ":no_mobile_phones:" => "📵",
    ":underage:" => "🔞",
    ":radioactive:" => "☢️",
    ":biohazard:" => "☣️",
    ":arrow_up:" => "⬆️",
    ":arrow_upper_right:" => "↗️",
    ":arrow_right:" => "➡️",
    ":arrow_lower_right:" => "↘️",
    ":arrow_down:" => "⬇️",
    ":arrow_lower_left:" => "↙️",
    ":arrow_left:" => "⬅️",
    ":arrow_upper_left:" => "↖️",
    ":arrow_up_down:" => "↕️",
    ":left_right_arrow:" => "↔️",
    ":leftwards_arrow_with_hook:" => "↩️",
    ":arrow_right_hook:" => "↪️",
    ":arrow_heading_up:" => "⤴️",
    ":arrow_heading_down:" => "⤵️",
    ":arrows_clockwise:" => "🔃",
    ":arrows_counterclockwise:" => "🔄",
    ":back:" => "🔙",
    ":end:" => "🔚",
    ":on:" => "🔛",
    ":soon:" => "🔜",
    ":top:" => "🔝",
    ":place_of_worship:" => "🛐",
    ":atom_symbol:" => "⚛️",
    ":om:" => "🕉️",
    ":star_of_david:" => "✡️",
    ":wheel_of_dharma:" => "☸️",
    ":yin_yang:" => "☯️",
    ":latin_cross:" => "✝️",
    ":orthodox_cross:" => "☦️",
    ":star_and_crescent:" => "☪️",
    ":peace_symbol:" => "☮️",
    ":menorah:" => "🕎",
    ":six_pointed_star:" => "🔯",
    ":khanda:" => "🪯",
    ":aries:" => "♈",
    ":taurus:" => "♉",
    ":gemini:" => "♊",
    ":cancer:" => "♋",
    ":leo:" => "♌",
    ":virgo:" => "♍",
    ":libra:" => "♎",
    ":scorpius:" => "♏",
    ":sagittarius:" => "♐",
    ":capricorn:" => "♑",
    ":aquarius:" => "♒",
    ":pisces:" => "♓",
    ":ophiuchus:" => "⛎",
    ":twisted_rightwards_arrows:" => "🔀",
    ":repeat:" => "🔁",
    ":repeat_one:" => "🔂",
    ":arrow_forward:" => "▶️",
    ":fast_forward:" => "⏩",
    ":next_track_button:" => "⏭️",
    ":play_or_pause_button:" => "⏯️",
    ":arrow_backward:" => "◀️",
    ":rewind:" => "⏪",
    ":previous_track_button:" => "⏮️",
    ":arrow_up_small:" => "🔼",
    ":arrow_double_up:" => "⏫",
    ":arrow_down_small:" => "🔽",
    ":arrow_double_down:" => "⏬",
    ":pause_button:" => "⏸️",
    ":stop_button:" => "⏹️",
    ":record_button:" => "⏺️",
    ":eject_button:" => "⏏️",
    ":cinema:" => "🎦",
    ":low_brightness:" => "🔅",
    ":high_brightness:" => "🔆",
    ":signal_strength:" => "📶",
    ":wireless:" => "🛜",
    ":vibration_mode:" => "📳",
    ":mobile_phone_off:" => "📴",
    ":female_sign:" => "♀️",
    ":male_sign:" => "♂️",
    ":transgender_symbol:" => "⚧️",
    ":heavy_multiplication_x:" => "✖️",
    ":heavy_plus_sign:" => "➕",
    ":heavy_minus_sign:" => "➖",
    ":heavy_division_sign:" => "➗",
    ":heavy_equals_sign:" => "🟰",
    ":infinity:" => "♾️",
    ":bangbang:" => "‼️",
    ":interrobang:" => "⁉️",
    ":question:" => "❓",
    ":grey_question:" => "❔",
    ":grey_exclamation:" => "❕",
    ":exclamation:" => "❗",
    ":heavy_exclamation_mark:" => "❗",
    ":wavy_dash:" => "〰️",
    ":currency_exchange:" => "💱",
    ":heavy_dollar_sign:" => "💲",
    ":medical_symbol:" => "⚕️",
    ":recycle:" => "♻️",
    ":fleur_de_lis:" => "⚜️",
    ":trident:" => "🔱",
    ":name_badge:" => "📛",
    ":beginner:" => "🔰",
    ":o:" => "⭕",
    ":white_check_mark:" => "✅",
    ":ballot_box_with_check:" => "☑️",
    ":heavy_check_mark:" => "✔️",
    ":x:" => "❌",
    ":negative_squared_cross_mark:" => "❎",
    ":curly_loop:" => "➰",
    ":loop:" => "➿",
    ":part_alternation_mark:" => "〽️",
    ":eight_spoked_asterisk:" => "✳️",
    ":eight_pointed_black_star:" => "✴️",
    ":sparkle:" => "❇️",
    ":copyright:" => "©️",
    ":registered:" => "®️",
    ":tm:" => "™️",
    ":hash:" => "#️⃣",
    ":asterisk:" => "*️⃣",
    ":zero:" => "0️⃣",
    ":one:" => "1️⃣",
    ":two:" => "2️⃣",
    ":three:" => "3️⃣",
    ":four:" => "4️⃣",
    ":five:" => "5️⃣",
    ":six:" => "6️⃣",
    ":seven:" => "7️⃣",
    ":eight:" => "8️⃣",
    ":nine:" => "9️⃣",
    ":keycap_ten:" => "🔟",
    ":capital_abcd:" => "🔠",
    ":abcd:" => "🔡",
    ":1234:" => "🔢",
    ":symbols:" => "🔣",
    ":abc:" => "🔤",
    ":a:" => "🅰️",
    ":ab:" => "🆎",
    ":b:" => "🅱️",
    ":cl:" => "🆑",
    ":cool:" => "🆒",
    ":free:" => "🆓",
    ":information_source:" => "ℹ️",
    ":id:" => "🆔",
    ":m:" => "Ⓜ️",
    ":new:" => "🆕",
    ":ng:" => "🆖",
    ":o2:" => "🅾️",
    ":ok:" => "🆗",
    ":parking:" => "🅿️",
    ":sos:" => "🆘",
    ":up:" => "🆙",
    ":vs:" => "🆚",
    ":koko:" => "🈁",
    ":sa:" => "🈂️",
    ":u6708:" => "🈷️",
    ":u6709:" => "🈶",
    ":u6307:" => "🈯",
    ":ideograph_advantage:" => "🉐",
    ":u5272:" => "🈹",
    ":u7121:" => "🈚",
    ":u7981:" => "🈲",
    ":accept:" => "🉑",
    ":u7533:" => "🈸",
    ":u5408:" => "🈴",
    ":u7a7a:" => "🈳",
    ":congratulations:" => "㊗️",
    ":secret:" => "㊙️",
    ":u55b6:" => "🈺",
    ":u6e80:" => "🈵",
    ":red_circle:" => "🔴",
    ":orange_circle:" => "🟠",
    ":yellow_circle:" => "🟡",
    ":green_circle:" => "🟢",
    ":large_blue_circle:" => "🔵",
    ":purple_circle:" => "🟣",
    ":brown_circle:" => "🟤",
    ":black_circle:" => "⚫",
    ":white_circle:" => "⚪",
    ":red_square:" => "🟥",
    ":orange_square:" => "🟧",
    ":yellow_square:" => "🟨",
    ":green_square:" => "🟩",
    ":blue_square:" => "🟦",
    ":purple_square:" => "🟪",
    ":brown_square:" => "🟫",
    ":black_large_square:" => "⬛",
    ":white_large_square:" => "⬜",
    ":black_medium_square:" => "◼️",
    ":white_medium_square:" => "◻️",
    ":black_medium_small_square:" => "◾",
    ":white_medium_small_square:" => "◽",
    ":black_small_square:" => "▪️",
    ":white_small_square:" => "▫️",
    ":large_orange_diamond:" => "🔶",
    ":large_blue_diamond:" => "🔷",
    ":small_orange_diamond:" => "🔸",
    ":small_blue_diamond:" => "🔹",
    ":small_red_triangle:" => "🔺",
    ":small_red_triangle_down:" => "🔻",
    ":diamond_shape_with_a_dot_inside:" => "💠",
    ":radio_button:" => "🔘",
    ":white_square_button:" => "🔳",
    ":black_square_button:" => "🔲",

    // Flags
    ":checkered_flag:" => "🏁",
    ":triangular_flag_on_post:" => "🚩",
    ":crossed_flags:" => "🎌",
    ":black_flag:" => "🏴",
    ":white_flag:" => "🏳️",
    ":rainbow_flag:" => "🏳️\u{200d}🌈",
    ":transgender_flag:" => "🏳️\u{200d}⚧️",
    ":pirate_flag:" => "🏴\u{200d}☠️",
    ":ascension_island:" => "🇦🇨",
    ":andorra:" => "🇦🇩",
    ":united_arab_emirates:" => "🇦🇪",
    ":afghanistan:" => "🇦🇫",
    ":antigua_barbuda:" => "🇦🇬",
    ":anguilla:" => "🇦🇮",
    ":albania:" => "🇦🇱",
    ":armenia:" => "🇦🇲",
    ":angola:" => "🇦🇴",
    ":antarctica:" => "🇦🇶",
    ":argentina:" => "🇦🇷",
    ":american_samoa:" => "🇦🇸",
    ":austria:" => "🇦🇹",
    ":australia:" => "🇦🇺",
    ":aruba:" => "🇦🇼",
    ":aland_islands:" => "🇦🇽",
    ":azerbaijan:" => "🇦🇿",
    ":bosnia_herzegovina:" => "🇧🇦",
    ":barbados:" => "🇧🇧",
    ":bangladesh:" => "🇧🇩",
    ":belgium:" => "🇧🇪",
    ":burkina_faso:" => "🇧🇫",
    ":bulgaria:" => "🇧🇬",
    ":bahrain:" => "🇧🇭",
    ":burundi:" => "🇧🇮",
    ":benin:" => "🇧🇯",
    ":st_barthelemy:" => "🇧🇱",
    ":bermuda:" => "🇧🇲",
    ":brunei:" => "🇧🇳",
    ":bolivia:" => "🇧🇴",
    ":caribbean_netherlands:" => "🇧🇶",
    ":brazil:" => "🇧🇷",
    ":bahamas:" => "🇧🇸",
    ":bhutan:" => "🇧🇹",
    ":bouvet_island:" => "🇧🇻",
    ":botswana:" => "🇧🇼",
    ":belarus:" => "🇧🇾",
    ":belize:" => "🇧🇿",
    ":canada:" => "🇨🇦",
    ":cocos_islands:" => "🇨🇨",
    ":congo_kinshasa:" => "🇨🇩",
    ":central_african_republic:" => "🇨🇫",
    ":congo_brazzaville:" => "🇨🇬",
    ":switzerland:" => "🇨🇭",
    ":cote_divoire:" => "🇨🇮",
    ":cook_islands:" => "🇨🇰",
    ":chile:" => "🇨🇱",
    ":cameroon:" => "🇨🇲",
    ":cn:" => "🇨🇳",
    ":colombia:" => "🇨🇴",
    ":clipperton_island:" => "🇨🇵",
    ":costa_rica:" => "🇨🇷",
    ":cuba:" => "🇨🇺",
    ":cape_verde:" => "🇨🇻",
    ":curacao:" => "🇨🇼",
    ":christmas_island:" => "🇨🇽",
    ":cyprus:" => "🇨🇾",
    ":czech_republic:" => "🇨🇿",
    ":de:" => "🇩🇪",
    ":diego_garcia:" => "🇩🇬",
    ":djibouti:" => "🇩🇯",
    ":denmark:" => "🇩🇰",
    ":dominica:" => "🇩🇲",
    ":dominican_republic:" => "🇩🇴",
    ":algeria:" => "🇩🇿",
    ":ceuta_melilla:" => "🇪🇦",
    ":ecuador:" => "🇪🇨",
    ":estonia:" => "🇪🇪",
    ":egypt:" => "🇪🇬",
    ":western_sahara:" => "🇪🇭",
    ":eritrea:" => "🇪🇷",
    ":es:" => "🇪🇸",
    ":ethiopia:" => "🇪🇹",
    ":eu:" => "🇪🇺",
    ":european_union:" => "🇪🇺",
    ":finland:" => "🇫🇮",
    ":fiji:" => "🇫🇯",
    ":falkland_islands:" => "🇫🇰",
    ":micronesia:" => "🇫🇲",
    ":faroe_islands:" => "🇫🇴",
    ":fr:" => "🇫🇷",
    ":gabon:" => "🇬🇦",
    ":gb:" => "🇬🇧",
    ":uk:" => "🇬🇧",
    ":grenada:" => "🇬🇩",
    ":georgia:" => "🇬🇪",
    ":french_guiana:" => "🇬🇫",
    ":guernsey:" => "🇬🇬",
    ":ghana:" => "🇬🇭",
    ":gibraltar:" => "🇬🇮",
    ":greenland:" => "🇬🇱",
    ":gambia:" => "🇬🇲",
    ":guinea:" => "🇬🇳",
    ":guadeloupe:" => "🇬🇵",
    ":equatorial_guinea:" => "🇬🇶",
    ":greece:" => "🇬🇷",
    ":south_georgia_south_sandwich_islands:" => "🇬🇸",
    ":guatemala:" => "🇬🇹",
    ":guam:" => "🇬🇺",
    ":guinea_bissau:" => "🇬🇼",
    ":guyana:" => "🇬🇾",
    ":hong_kong:" => "🇭🇰",
    ":heard_mcdonald_islands:" => "🇭🇲",
    ":honduras:" => "🇭🇳",
    ":croatia:" => "🇭🇷",
    ":haiti:" => "🇭🇹",
    ":hungary:" => "🇭🇺",
    ":canary_islands:" => "🇮🇨",
    ":indonesia:" => "🇮🇩",
    ":ireland:" => "🇮🇪",
    ":israel:" => "🇮🇱",
    ":isle_of_man:" => "🇮🇲",
    ":india:" => "🇮🇳",
    ":british_indian_ocean_territory:" => "🇮🇴",
    ":iraq:" => "🇮🇶",
    ":iran:" => "🇮🇷",
    ":iceland:" => "🇮🇸",
    ":it:" => "🇮🇹",
    ":jersey:" => "🇯🇪",
    ":jamaica:" => "🇯🇲",
    ":jordan:" => "🇯🇴",
    ":jp:" => "🇯🇵",
    ":kenya:" => "🇰🇪",
    ":kyrgyzstan:" => "🇰🇬",
    ":cambodia:" => "🇰🇭",
    ":kiribati:" => "🇰🇮",
    ":comoros:" => "🇰🇲",
    ":st_kitts_nevis:" => "🇰🇳",
    ":north_korea:" => "🇰🇵",
    ":kr:" => "🇰🇷",
    ":kuwait:" => "🇰🇼",
    ":cayman_islands:" => "🇰🇾",
    ":kazakhstan:" => "🇰🇿",
    ":laos:" => "🇱🇦",
    ":lebanon:" => "🇱🇧",
    ":st_lucia:" => "🇱🇨",
    ":liechtenstein:" => "🇱🇮",
    ":sri_lanka:" => "🇱🇰",
    ":liberia:" => "🇱🇷",
    ":lesotho:" => "🇱🇸",
    ":lithuania:" => "🇱🇹",
    ":luxembourg:" => "🇱🇺",
    ":latvia:" => "🇱🇻",
    ":libya:" => "🇱🇾",
    ":morocco:" => "🇲🇦",
    ":monaco:" => "🇲🇨",
    ":moldova:" => "🇲🇩",
    ":montenegro:" => "🇲🇪",
    ":st_martin:" => "🇲🇫",
    ":madagascar:" => "🇲🇬",
    ":marshall_islands:" => "🇲🇭",
    ":macedonia:" => "🇲🇰",
    ":mali:" => "🇲🇱",
    ":myanmar:" => "🇲🇲",
    ":mongolia:" => "🇲🇳",
    ":macau:" => "🇲🇴",
    ":northern_mariana_islands:" => "🇲🇵",
    ":martinique:" => "🇲🇶",
    ":mauritania:" => "🇲🇷",
    ":montserrat:" => "🇲🇸",
    ":malta:" => "🇲🇹",
    ":mauritius:" => "🇲🇺",
    ":maldives:" => "🇲🇻",
    ":malawi:" => "🇲🇼",
    ":mexico:" => "🇲🇽",
    ":malaysia:" => "🇲🇾",
    ":mozambique:" => "🇲🇿",
    ":namibia:" => "🇳🇦",
    ":new_caledonia:" => "🇳🇨",
    ":niger:" => "🇳🇪",
    ":norfolk_island:" => "🇳🇫",
    ":nigeria:" => "🇳🇬",
    ":nicaragua:" => "🇳🇮",
    ":netherlands:" => "🇳🇱",
    ":norway:" => "🇳🇴",
    ":nepal:" => "🇳🇵",
    ":nauru:" => "🇳🇷",
    ":niue:" => "🇳🇺",
    ":new_zealand:" => "🇳🇿",
    ":oman:" => "🇴🇲",
    ":panama:" => "🇵🇦",
    ":peru:" => "🇵🇪",
    ":french_polynesia:" => "🇵🇫",
    ":papua_new_guinea:" => "🇵🇬",
    ":philippines:" => "🇵🇭",
    ":pakistan:" => "🇵🇰",
    ":poland:" => "🇵🇱",
    ":st_pierre_miquelon:" => "🇵🇲",
    ":pitcairn_islands:" => "🇵🇳",
    ":puerto_rico:" => "🇵🇷",
    ":palestinian_territories:" => "🇵🇸",
    ":portugal:" => "🇵🇹",
    ":palau:" => "🇵🇼",
    ":paraguay:" => "🇵🇾",
    ":qatar:" => "🇶🇦",
    ":reunion:" => "🇷🇪",
    ":romania:" => "🇷🇴",
    ":serbia:" => "🇷🇸",
    ":ru:" => "🇷🇺",
    ":rwanda:" => "🇷🇼",
    ":saudi_arabia:" => "🇸🇦",
    ":solomon_islands:" => "🇸🇧",
    ":seychelles:" => "🇸🇨",
    ":sudan:" => "🇸🇩",
    ":sweden:" => "🇸🇪",
    ":singapore:" => "🇸🇬",
    ":st_helena:" => "🇸🇭",
    ":slovenia:" => "🇸🇮",
    ":svalbard_jan_mayen:" => "🇸🇯",
    ":slovakia:" => "🇸🇰",
    ":sierra_leone:" => "🇸🇱",
    ":san_marino:" => "🇸🇲",
    ":senegal:" => "🇸🇳",
    ":somalia:" => "🇸🇴",
    ":suriname:" => "🇸🇷",
    ":south_sudan:" => "🇸🇸",
    ":sao_tome_principe:" => "🇸🇹",
    ":el_salvador:" => "🇸🇻",
    ":sint_maarten:" => "🇸🇽",
    ":syria:" => "🇸🇾",
    ":swaziland:" => "🇸🇿",
    ":tristan_da_cunha:" => "🇹🇦",
    ":turks_caicos_islands:" => "🇹🇨",
    ":chad:" => "🇹🇩",
    ":french_southern_territories:" => "🇹🇫",
    ":togo:" => "🇹🇬",
    ":thailand:" => "🇹🇭",
    ":tajikistan:" => "🇹🇯",
    ":tokelau:" => "🇹🇰",
    ":timor_leste:" => "🇹🇱",
    ":turkmenistan:" => "🇹🇲",
    ":tunisia:" => "🇹🇳",
    ":tonga:" => "🇹🇴",
    ":tr:" => "🇹🇷",
    ":trinidad_tobago:" => "🇹🇹",
    ":tuvalu:" => "🇹🇻",
    ":taiwan:" => "🇹🇼",
    ":tanzania:" => "🇹🇿",
    ":ukraine:" => "🇺🇦",
    ":uganda:" => "🇺🇬",
    ":us_outlying_islands:" => "🇺🇲",
    ":united_nations:" => "🇺🇳",
    ":us:" => "🇺🇸",
    ":uruguay:" => "🇺🇾",
    ":uzbekistan:" => "🇺🇿",
    ":vatican_city:" => "🇻🇦",
    ":st_vincent_grenadines:" => "🇻🇨",
    ":venezuela:" => "🇻🇪",
    ":british_virgin_islands:" => "🇻🇬",
    ":us_virgin_islands:" => "🇻🇮",
    ":vietnam:" => "🇻🇳",
    ":vanuatu:" => "🇻🇺",
    ":wallis_futuna:" => "🇼🇫",
    ":samoa:" => "🇼🇸",
    ":kosovo:" => "🇽🇰",
    ":yemen:" => "🇾🇪",
    ":mayotte:" => "🇾🇹",
    ":south_africa:" => "🇿🇦",
    ":zambia:" => "🇿🇲",
    ":zimbabwe:" => "🇿🇼",
    ":england:" => "🏴\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}",
    ":scotland:" => "🏴\u{e0067}\u{e0062}\u{e0073}\u{e0063}\u{e0074}\u{e007f}",
    ":wales:" => "🏴\u{e0067}\u{e0062}\u{e0077}\u{e006c}\u{e0073}\u{e007f}",

    // GitHub custom emojis
    ":atom:" => "/static/emojis/atom.png",
    ":basecamp:" => "/static/emojis/basecamp.png",
    ":basecampy:" => "/static/emojis/basecampy.png",
    ":bowtie:" => "/static/emojis/bowtie.png",
    ":dependabot:" => "/static/emojis/dependabot.png",
    ":electron:" => "/static/emojis/electron.png",
    ":feelsgood:" => "/static/emojis/feelsgood.png",
    ":finnadie:" => "/static/emojis/finnadie.png",
    ":fishsticks:" => "/static/emojis/fishsticks.png",
    ":goberserk:" => "/static/emojis/goberserk.png",
    ":godmode:" => "/static/emojis/godmode.png",
    ":hurtrealbad:" => "/static/emojis/hurtrealbad.png",
    ":neckbeard:" => "/static/emojis/neckbeard.png",
    ":octocat:" => "/static/emojis/octocat.png",
    ":rage1:" => "/static/emojis/rage1.png",
    ":rage2:" => "/static/emojis/rage2.png",
    ":rage3:" => "/static/emojis/rage3.png",
    ":rage4:" => "/static/emojis/rage4.png",
    ":shipit:" => "/static/emojis/shipit.png",
    ":squirrel:" => "/static/emojis/shipit.png",
    ":suspect:" => "/static/emojis/suspect.png",
    ":trollface:" => "/static/emojis/trollface.png",
};

/// Glyph or image path for a complete shortcode such as `":smile:"`.
#[must_use]
pub fn lookup(shortcode: &str) -> Option<&'static str> {
    EMOJI.get(shortcode).copied()
}

/// Replace every known shortcode in `text`.
///
/// Matches are leftmost-first and non-overlapping, so `:a::b:` is a single
/// candidate. Unknown shortcodes stay as written. Values beginning with `/`
/// become an `<img>` tag. The input must already be HTML-escaped.
///
/// # Examples
///
/// ```
/// use grip_renderer::emoji;
///
/// assert_eq!(emoji::substitute("ship it :rocket:"), "ship it 🚀");
/// assert_eq!(emoji::substitute(":not_an_emoji:"), ":not_an_emoji:");
/// ```
pub fn substitute(text: &str) -> Cow<'_, str> {
    if !text.contains(':') {
        return Cow::Borrowed(text);
    }
    SHORTCODE.replace_all(text, |caps: &Captures<'_>| {
        let code = &caps[0];
        match lookup(code) {
            Some(path) if path.starts_with('/') => format!(
                r#"<img class="emoji" title="{code}" alt="{code}" src="{path}" height="20" width="20" align="absmiddle">"#
            ),
            Some(glyph) => glyph.to_owned(),
            None => code.to_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(":smile:"), Some("😄"));
        assert_eq!(lookup(":+1:"), Some("👍"));
        assert_eq!(lookup("smile"), None);
        assert_eq!(lookup(":nope:"), None);
    }

    #[test]
    fn test_lookup_flags_and_newer_emoji() {
        assert_eq!(lookup(":jp:"), Some("🇯🇵"));
        assert_eq!(lookup(":us:"), Some("🇺🇸"));
        assert_eq!(lookup(":uk:"), lookup(":gb:"));
        assert_eq!(lookup(":canada:"), Some("🇨🇦"));
        assert_eq!(lookup(":smiling_face_with_three_hearts:"), Some("🥰"));
        assert_eq!(lookup(":technologist:"), Some("🧑\u{200d}💻"));
        assert_eq!(lookup(":hash:"), Some("#\u{fe0f}\u{20e3}"));
    }

    #[test]
    fn test_aliases_share_glyph() {
        assert_eq!(lookup(":thumbsup:"), lookup(":+1:"));
        assert_eq!(lookup(":poop:"), lookup(":hankey:"));
        assert_eq!(lookup(":laughing:"), lookup(":satisfied:"));
        assert_eq!(lookup(":beetle:"), Some("🪲"));
        assert_eq!(lookup(":lady_beetle:"), Some("🐞"));
    }

    #[test]
    fn test_table_covers_github_set() {
        assert!(EMOJI.len() > 1800, "{}", EMOJI.len());
    }

    #[test]
    fn test_substitute_glyphs() {
        assert_eq!(substitute("I :heart: Rust :tada:"), "I ❤️ Rust 🎉");
    }

    #[test]
    fn test_substitute_custom_image() {
        assert_eq!(
            substitute(":octocat:"),
            r#"<img class="emoji" title=":octocat:" alt=":octocat:" src="/static/emojis/octocat.png" height="20" width="20" align="absmiddle">"#
        );
    }

    #[test]
    fn test_substitute_unknown_unchanged() {
        assert_eq!(substitute("time is 10:30:00"), "time is 10:30:00");
        assert_eq!(substitute(":unknown_code:"), ":unknown_code:");
    }

    #[test]
    fn test_substitute_adjacent_codes_are_one_candidate() {
        assert_eq!(substitute(":smile::heart:"), ":smile::heart:");
        assert_eq!(substitute(":smile: :heart:"), "😄 ❤️");
    }

    #[test]
    fn test_substitute_borrows_without_colon() {
        assert!(matches!(substitute("no codes here"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_custom_paths_are_absolute() {
        for (code, value) in &EMOJI {
            assert!(code.starts_with(':') && code.ends_with(':'), "{code}");
            if value.is_ascii() {
                assert!(value.starts_with("/static/emojis/"), "{code} => {value}");
            }
        }
    }
}
