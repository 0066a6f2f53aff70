use rand::Rng;

const FIREFOX_VERSIONS: [&str; 12] = [
    "133.0", "132.0", "131.0", "130.0", "129.0", "128.0", "127.0", "126.0", "125.0", "124.0",
    "123.0", "122.0",
];

const CHROME_VERSIONS: [&str; 12] = [
    "133.0.6943.50", "133.0.6943.88", "132.0.6834.83", "132.0.6834.110", "131.0.6778.85",
    "131.0.6778.108", "130.0.6723.92", "130.0.6723.117", "129.0.6668.70", "129.0.6668.89",
    "128.0.6613.120", "127.0.6533.88",
];

const EDGE_VERSIONS: [&str; 8] = [
    "133.0.3048.56", "132.0.2957.55", "131.0.2903.86", "130.0.2849.68", "129.0.2792.52",
    "128.0.2739.79", "127.0.2651.98", "126.0.2592.87",
];

const DESKTOP_OS: [&str; 10] = [
    "Windows NT 10.0; Win64; x64",
    "Windows NT 10.0; Win64; x64",
    "Windows NT 10.0; WOW64",
    "Windows NT 6.1; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "Macintosh; Intel Mac OS X 13_6_9",
    "Macintosh; Intel Mac OS X 14_7_2",
    "Macintosh; Intel Mac OS X 15_2",
    "X11; Linux x86_64",
    "X11; Ubuntu; Linux x86_64",
];

const IOS_DEVICES: [&str; 4] = [
    "iPhone; CPU iPhone OS 18_2 like Mac OS X",
    "iPhone; CPU iPhone OS 17_7 like Mac OS X",
    "iPad; CPU OS 18_1 like Mac OS X",
    "iPad; CPU OS 17_6 like Mac OS X",
];

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items[rand::rng().random_range(0..items.len())]
}

fn gen_chrome_ua() -> String {
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
        pick(&DESKTOP_OS),
        pick(&CHROME_VERSIONS)
    )
}

fn gen_firefox_ua() -> String {
    let version = pick(&FIREFOX_VERSIONS);
    format!(
        "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
        pick(&DESKTOP_OS),
        version,
        version
    )
}

fn gen_edge_ua() -> String {
    let version = pick(&EDGE_VERSIONS);
    let chrome_major = version.split('.').next().unwrap_or("130");
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.0.0 Safari/537.36 Edg/{}",
        pick(&DESKTOP_OS),
        chrome_major,
        version
    )
}

fn gen_safari_mobile_ua() -> String {
    let safari_versions = ["18.2", "18.1", "18.0", "17.7", "17.6"];
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{} Mobile/15E148 Safari/604.1",
        pick(&IOS_DEVICES),
        pick(&safari_versions)
    )
}

pub fn gen_random_ua() -> String {
    let mut rng = rand::rng();
    let choice = rng.random_range(0..20);
    match choice {
        0..=9 => gen_chrome_ua(),     // 50% Chrome (most popular)
        10..=13 => gen_firefox_ua(),  // 20% Firefox
        14..=17 => gen_edge_ua(),     // 20% Edge
        _ => gen_safari_mobile_ua(),  // 10% Safari Mobile
    }
}
