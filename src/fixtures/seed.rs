// Built-in demo dataset for the ski club portal.
use super::models::*;

const UNSPLASH: &str = "https://images.unsplash.com";

fn photo(id: &str, width: u32) -> String {
    format!("{UNSPLASH}/photo-{id}?q=80&w={width}")
}

fn member_photo(file: &str) -> String {
    format!("/images/members/{file}")
}

fn user(id: &str, username: &str, name: &str, email: &str, unit: &str, phone: &str) -> User {
    User {
        id: id.into(),
        username: username.into(),
        name: name.into(),
        email: email.into(),
        position: None,
        unit: Some(unit.into()),
        phone: Some(phone.into()),
        is_approved: true,
        is_admin: false,
    }
}

pub(super) fn users() -> Vec<User> {
    vec![
        current_user(),
        user("2", "johndoe", "John Doe", "john@example.com", "102", "555-234-5678"),
        user("3", "janesmith", "Jane Smith", "jane@example.com", "103", "555-345-6789"),
    ]
}

pub(super) fn current_user() -> User {
    User {
        position: Some("President".into()),
        is_admin: true,
        ..user("1", "admin", "Admin User", "admin@example.com", "101", "555-123-4567")
    }
}

pub(super) fn news() -> Vec<NewsPost> {
    vec![
        NewsPost {
            id: "1".into(),
            title: "Winter Season Opening".into(),
            post: "<p>The ski club will open for the winter season on December 1st. Get your gear ready!</p>".into(),
            author: "Admin User".into(),
            created_at: "2025-03-15T12:00:00Z".into(),
            updated_at: "2025-03-15T12:00:00Z".into(),
            is_published: true,
            image: Some(photo("1551698618-1dfe5d97d256", 1200)),
            thumbnail: Some(photo("1551698618-1dfe5d97d256", 300)),
            pdf_url: Some("/pdfs/winter-schedule.pdf".into()),
        },
        NewsPost {
            id: "2".into(),
            title: "New Chairlift Installation".into(),
            post: "<p>We are excited to announce the installation of a new high-speed chairlift for the upcoming season.</p>".into(),
            author: "John Doe".into(),
            created_at: "2025-02-20T14:30:00Z".into(),
            updated_at: "2025-02-21T09:15:00Z".into(),
            is_published: true,
            image: Some(photo("1605540436563-5bca919ae766", 1200)),
            thumbnail: Some(photo("1605540436563-5bca919ae766", 300)),
            pdf_url: None,
        },
        NewsPost {
            id: "3".into(),
            title: "Summer Maintenance Update".into(),
            post: "<p>Summer maintenance is progressing well. All trails are being prepared for the winter season.</p>".into(),
            author: "Jane Smith".into(),
            created_at: "2025-01-25T10:00:00Z".into(),
            updated_at: "2025-01-25T10:00:00Z".into(),
            is_published: false,
            image: None,
            thumbnail: None,
            pdf_url: None,
        },
        NewsPost {
            id: "4".into(),
            title: "Annual Member Meeting".into(),
            post: "<p>The annual member meeting will be held on May 15th at the lodge. All members are encouraged to attend.</p>".into(),
            author: "Admin User".into(),
            created_at: "2025-01-10T10:00:00Z".into(),
            updated_at: "2025-01-10T10:00:00Z".into(),
            is_published: true,
            image: None,
            thumbnail: None,
            pdf_url: None,
        },
        NewsPost {
            id: "5".into(),
            title: "Lodge Work Weekend".into(),
            post: "<p>Thanks to everyone who helped paint the lodge and split firewood in the fall.</p>".into(),
            author: "John Doe".into(),
            created_at: "2024-10-20T14:30:00Z".into(),
            updated_at: "2024-10-20T14:30:00Z".into(),
            is_published: true,
            image: None,
            thumbnail: None,
            pdf_url: None,
        },
    ]
}

fn event(id: &str, title: &str, description: &str, start: &str, location: &str, created: &str) -> Event {
    Event {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        start: start.into(),
        end: None,
        all_day: false,
        location: location.into(),
        created_at: created.into(),
        updated_at: created.into(),
    }
}

pub(super) fn events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Annual Ski Race",
            "Join us for our annual ski race competition with prizes for different age categories.",
            "2025-01-15T09:00:00Z",
            "Main Slope",
            "2024-11-01T12:00:00Z",
        ),
        event(
            "2",
            "Winter Social Gathering",
            "Evening social event with food, drinks, and entertainment for all club members.",
            "2024-12-20T18:00:00Z",
            "Club Lodge",
            "2024-10-15T14:30:00Z",
        ),
        event(
            "3",
            "Beginners Ski Lesson",
            "Free ski lessons for beginners, equipment provided.",
            "2025-01-10T10:00:00Z",
            "Training Slope",
            "2024-11-20T09:00:00Z",
        ),
        Event {
            end: Some("2025-02-16T23:59:00Z".into()),
            all_day: true,
            ..event(
                "4",
                "Presidents' Day Weekend",
                "Lodge open all weekend with a Saturday night potluck.",
                "2025-02-15T00:00:00Z",
                "Club Lodge",
                "2024-12-01T08:00:00Z",
            )
        },
    ]
}

fn member(first: &str, last: &str, email: &str, phones: &[(&str, &str)], since: i32) -> Member {
    Member {
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        phone_number: phones
            .iter()
            .map(|(number, kind)| PhoneNumber {
                number: (*number).into(),
                kind: (*kind).into(),
            })
            .collect(),
        honorary: false,
        member_since: since,
    }
}

fn address(kind: AddressType, street: &str, city: &str, zip: &str) -> Address {
    Address {
        address_type: kind,
        street: street.into(),
        street2: None,
        city: city.into(),
        state: "NY".into(),
        zip: zip.into(),
    }
}

fn unit(id: &str, members: Vec<Member>, addresses: Vec<Address>, bio: &str, photo_file: &str) -> Unit {
    Unit {
        id: id.into(),
        members,
        addresses,
        bio: bio.into(),
        image: member_photo(photo_file),
        thumbnail: member_photo(photo_file),
    }
}

pub(super) fn units() -> Vec<Unit> {
    use AddressType::{Primary, Secondary};

    vec![
        unit(
            "679946b7aa76f40b4d292abd",
            vec![
                member("John", "Smith", "jsmith@example.com", &[("(716) 555-1234", "Home")], 2010),
                member("Mary", "Smith", "msmith@example.com", &[("(716) 555-5678", "Home")], 2010),
            ],
            vec![address(Primary, "123 Main Street", "Buffalo", "14201")],
            "The Smiths have been members since 2010 and enjoy both winter skiing and summer hiking in the area.",
            "smithfamily.jpg",
        ),
        unit(
            "679946b7aa76f40b4d292abe",
            vec![
                member("Michael", "Thompson", "mthompson@gmail.com", &[("(585) 555-1234", "Mobile")], 2010),
                member("Sarah", "Thompson", "sthompson@outlook.com", &[("(585) 555-5678", "Mobile")], 2010),
            ],
            vec![
                address(Primary, "123 Highland Ave", "Rochester", "14618"),
                address(Secondary, "456 Lake Road", "Canandaigua", "14424"),
            ],
            "The Thompsons have been skiing at Ellicottville for over a decade and love hosting friends at their unit.",
            "thompsonfamily.jpg",
        ),
        unit(
            "679946b7aa76f40b4d292abf",
            vec![Member {
                honorary: true,
                ..member(
                    "Robert",
                    "Miller",
                    "rmiller@yahoo.com",
                    &[("(716) 555-9876", "Home"), ("(716) 555-5432", "Work")],
                    1995,
                )
            }],
            vec![address(Primary, "789 Delaware Ave", "Buffalo", "14209")],
            "Bob has been an honorary member since 1995 and has served on the club board for 15 years.",
            "miller.jpeg",
        ),
        unit(
            "679946b7aa76f40b4d292ac0",
            vec![
                member("Jennifer", "Davis", "jdavis@gmail.com", &[("(315) 555-7890", "Mobile")], 2018),
                member("Mark", "Davis", "mdavis@gmail.com", &[("(315) 555-4321", "Mobile")], 2018),
                member("Emma", "Davis", "", &[], 2018),
            ],
            vec![address(Primary, "567 James Street", "Syracuse", "13203")],
            "The Davis family joined in 2018 and are active in club social events.",
            "davisfamily.jpg",
        ),
        unit(
            "679946b7aa76f40b4d292ac1",
            vec![
                member("William", "Johnson", "wjohnson@icloud.com", &[("(607) 555-3456", "Home")], 2001),
                member("Patricia", "Johnson", "pjohnson@icloud.com", &[("(607) 555-7654", "Mobile")], 2001),
            ],
            vec![address(Primary, "890 University Ave", "Ithaca", "14850")],
            "The Johnsons are avid skiers who participate in the annual club race events.",
            "johnsonfamily.jpg",
        ),
    ]
}

fn image(
    id: &str,
    title: &str,
    description: &str,
    photo_id: &str,
    tags: &[&str],
    uploaded_by: &str,
    created_at: &str,
) -> Image {
    Image {
        id: id.into(),
        title: title.into(),
        description: Some(description.into()),
        image: photo(photo_id, 2000),
        thumbnail: photo(photo_id, 500),
        width: 2000,
        height: 1333,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        uploaded_by: uploaded_by.into(),
        created_at: created_at.into(),
        is_published: true,
        carousel: false,
    }
}

pub(super) fn images() -> Vec<Image> {
    vec![
        Image {
            carousel: true,
            ..image(
                "1",
                "Fresh Powder Day",
                "Perfect powder conditions after an overnight snowfall",
                "1551698618-1dfe5d97d256",
                &["winter", "powder"],
                "Admin User",
                "2025-01-15T12:00:00Z",
            )
        },
        Image {
            carousel: true,
            ..image(
                "2",
                "Mountain Lodge",
                "Our cozy mountain lodge after a fresh snowfall",
                "1520208422220-d12a3c588e6c",
                &["lodge", "winter"],
                "Admin User",
                "2025-01-10T14:30:00Z",
            )
        },
        Image {
            carousel: true,
            ..image(
                "3",
                "Chairlift Views",
                "Amazing mountain views from the chairlift",
                "1605540436563-5bca919ae766",
                &["views", "chairlift"],
                "Regular User",
                "2025-01-05T10:00:00Z",
            )
        },
        image(
            "4",
            "Ski Equipment",
            "New ski equipment ready for the season",
            "1565992441121-4367c2967103",
            &["equipment", "ski"],
            "Regular User",
            "2024-12-20T15:45:00Z",
        ),
        image(
            "5",
            "Après-Ski Gathering",
            "Members enjoying drinks after a day on the slopes",
            "1528605248644-14dd04022da1",
            &["social", "après-ski"],
            "Admin User",
            "2024-12-15T18:30:00Z",
        ),
        image(
            "6",
            "Night Skiing",
            "Beautiful evening run under the lights",
            "1517825738774-7de9363ef735",
            &["night", "skiing"],
            "Regular User",
            "2024-12-10T19:15:00Z",
        ),
        image(
            "7",
            "Winter Landscape",
            "Beautiful winter landscape surrounding our club",
            "1491002052546-bf38f186af56",
            &["landscape", "winter"],
            "Admin User",
            "2024-12-05T11:20:00Z",
        ),
        Image {
            is_published: false,
            ..image(
                "8",
                "Snowboarding Action",
                "Club member showing off some snowboarding skills",
                "1522056615691-da7b8106c665",
                &["snowboarding", "action"],
                "Regular User",
                "2024-11-25T14:10:00Z",
            )
        },
    ]
}

fn bulletin(id: &str, title: &str, body: &str, author: (&str, &str), at: &str, status: PostStatus) -> BulletinPost {
    BulletinPost {
        id: id.into(),
        title: title.into(),
        body: body.into(),
        user: PostAuthor {
            id: author.0.into(),
            name: author.1.into(),
        },
        created_at: at.into(),
        updated_at: at.into(),
        status,
        image: None,
        thumbnail: None,
    }
}

pub(super) fn posts() -> Vec<BulletinPost> {
    const REGULAR: (&str, &str) = ("67f6c0b05a8f631d3bc66a37", "Regular User");
    const ADMIN: (&str, &str) = ("67f6c0b05a8f631d3bc66a36", "Admin User");

    vec![
        BulletinPost {
            image: Some(photo("1565992441121-4367c2967103", 2000)),
            thumbnail: Some(photo("1565992441121-4367c2967103", 500)),
            ..bulletin(
                "1",
                "Looking for ski partners this weekend",
                "<p>Anyone planning to ski this weekend? Looking for company on the slopes! I'll be there Saturday morning through Sunday afternoon.</p><p>I'm an intermediate skier comfortable on blue and easier black runs. Let me know if you're interested!</p>",
                REGULAR,
                "2025-03-20T14:30:00Z",
                PostStatus::Approved,
            )
        },
        bulletin(
            "2",
            "Selling ski equipment - great condition",
            "<p>I have some lightly used ski equipment for sale:</p><ul><li>Rossignol Experience 88 Ti skis (176cm)</li><li>Salomon S/Pro 100 boots (size 27.5)</li><li>Black Diamond poles</li></ul><p>DM me if interested!</p>",
            ADMIN,
            "2025-03-15T10:15:00Z",
            PostStatus::Approved,
        ),
        bulletin(
            "3",
            "Carpool from Buffalo on Saturday?",
            "<p>Heading down early Saturday morning from the Elmwood area. Room for two plus gear.</p>",
            REGULAR,
            "2025-03-12T08:00:00Z",
            PostStatus::Pending,
        ),
        BulletinPost {
            image: Some(photo("1528605248644-14dd04022da1", 2000)),
            thumbnail: Some(photo("1528605248644-14dd04022da1", 500)),
            ..bulletin(
                "4",
                "Potluck dinner this Friday at the lodge",
                "<p>Hosting a potluck dinner at the lodge this Friday at 7pm. Everyone welcome!</p><p>Please bring a dish to share and your favorite beverage.</p>",
                REGULAR,
                "2025-03-10T09:45:00Z",
                PostStatus::Approved,
            )
        },
        bulletin(
            "5",
            "Trail conditions report - March 5",
            "<p>Main runs are well groomed with good coverage. North face has some icy patches in the afternoon. South bowl still has excellent powder in the trees.</p>",
            ADMIN,
            "2025-03-05T16:20:00Z",
            PostStatus::Approved,
        ),
        bulletin(
            "6",
            "Cheap lift tickets!!!",
            "<p>Click here for discount tickets.</p>",
            REGULAR,
            "2025-03-01T12:00:00Z",
            PostStatus::Rejected,
        ),
    ]
}
