//! Demo data the portal starts from. It is the only data source; nothing here is
//! written back anywhere.
use crate::modules::{
    course::schema::{
        Answer, AssignmentEntity, AssignmentStatus, AssignmentSubmission, CourseEntity,
        CourseLevel, CourseModule, QuestionType, Quiz, QuizQuestion, QuizStatus, Resource,
        ResourceType,
    },
    message::schema::MessageEntity,
    notification::schema::{NotificationEntity, NotificationType},
    user::schema::{UserEntity, UserRole},
};
use crate::utils::utc_datetime;

fn user(
    id: &str,
    email: &str,
    name: &str,
    role: UserRole,
    avatar: &str,
    department: Option<&str>,
    joined_at: (i32, u32, u32),
) -> UserEntity {
    UserEntity {
        id: id.into(),
        email: email.into(),
        name: name.into(),
        role,
        avatar: Some(avatar.into()),
        department: department.map(Into::into),
        joined_at: utc_datetime(joined_at.0, joined_at.1, joined_at.2, 0, 0),
    }
}

pub fn users() -> Vec<UserEntity> {
    vec![
        user(
            "1",
            "john.doe@college.edu",
            "John Doe",
            UserRole::Student,
            "https://randomuser.me/api/portraits/men/1.jpg",
            Some("Computer Science"),
            (2023, 9, 1),
        ),
        user(
            "2",
            "jane.smith@college.edu",
            "Jane Smith",
            UserRole::Faculty,
            "https://randomuser.me/api/portraits/women/1.jpg",
            Some("Computer Science"),
            (2022, 1, 15),
        ),
        user(
            "3",
            "admin@college.edu",
            "Admin User",
            UserRole::Admin,
            "https://randomuser.me/api/portraits/men/2.jpg",
            None,
            (2021, 6, 10),
        ),
        user(
            "4",
            "mike.wilson@college.edu",
            "Mike Wilson",
            UserRole::Student,
            "https://randomuser.me/api/portraits/men/3.jpg",
            Some("Mathematics"),
            (2023, 8, 15),
        ),
        user(
            "5",
            "sarah.johnson@college.edu",
            "Sarah Johnson",
            UserRole::Faculty,
            "https://randomuser.me/api/portraits/women/2.jpg",
            Some("Physics"),
            (2022, 3, 20),
        ),
    ]
}

fn resource(
    id: &str,
    title: &str,
    _type: ResourceType,
    size: Option<&str>,
    duration: Option<&str>,
) -> Resource {
    Resource {
        id: id.into(),
        title: title.into(),
        _type,
        url: "#".into(),
        size: size.map(Into::into),
        duration: duration.map(Into::into),
        downloadable: matches!(_type, ResourceType::Pdf | ResourceType::Document),
    }
}

fn assignment(
    id: &str,
    title: &str,
    description: &str,
    due: (i32, u32, u32),
    points: u32,
    status: AssignmentStatus,
) -> AssignmentEntity {
    AssignmentEntity {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        due_date: utc_datetime(due.0, due.1, due.2, 0, 0),
        points,
        status,
        submission: None,
    }
}

pub fn courses() -> Vec<CourseEntity> {
    let users = users();
    let jane = users[1].clone();
    let sarah = users[4].clone();

    vec![
        CourseEntity {
            id: "1".into(),
            title: "Introduction to Programming".into(),
            description: "A beginner-friendly course that introduces fundamental programming concepts using Python.".into(),
            instructor: jane.clone(),
            cover_image: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?q=80&w=2728&auto=format&fit=crop".into(),
            created_at: utc_datetime(2023, 1, 10, 0, 0),
            updated_at: utc_datetime(2023, 8, 15, 0, 0),
            enrolled_students: 120,
            duration: "12 weeks".into(),
            level: CourseLevel::Beginner,
            modules: vec![CourseModule {
                id: "101".into(),
                title: "Getting Started with Python".into(),
                content: "<p>Learn the basics of Python programming language.</p>".into(),
                resources: vec![
                    resource("r1", "Python Installation Guide", ResourceType::Pdf, Some("2.5 MB"), None),
                    resource("r2", "Introduction to Programming Concepts", ResourceType::Video, None, Some("45 minutes")),
                ],
                assignments: vec![assignment(
                    "a1",
                    "Basic Python Syntax",
                    "Complete the exercises on basic Python syntax and structures.",
                    (2023, 9, 15),
                    10,
                    AssignmentStatus::Upcoming,
                )],
                quiz: Some(Quiz {
                    id: "q1".into(),
                    title: "Python Basics Quiz".into(),
                    description: "Test your understanding of Python basics.".into(),
                    time_limit: 30,
                    questions: vec![QuizQuestion {
                        id: "q1-1".into(),
                        question: "What is the correct way to create a variable in Python?".into(),
                        _type: QuestionType::MultipleChoice,
                        options: Some(vec![
                            "var x = 5".into(),
                            "x = 5".into(),
                            "int x = 5".into(),
                            "let x = 5".into(),
                        ]),
                        correct_answer: Answer::One("x = 5".into()),
                        points: 1,
                    }],
                    due_date: utc_datetime(2023, 9, 20, 0, 0),
                    status: QuizStatus::Upcoming,
                    attempts: Vec::new(),
                }),
            }],
        },
        CourseEntity {
            id: "2".into(),
            title: "Advanced Data Structures".into(),
            description: "Explore complex data structures and algorithms for efficient problem-solving.".into(),
            instructor: jane,
            cover_image: "https://images.unsplash.com/photo-1580894912989-0bc892f4efd0?q=80&w=2670&auto=format&fit=crop".into(),
            created_at: utc_datetime(2023, 2, 5, 0, 0),
            updated_at: utc_datetime(2023, 7, 20, 0, 0),
            enrolled_students: 85,
            duration: "10 weeks".into(),
            level: CourseLevel::Advanced,
            modules: vec![CourseModule {
                id: "201".into(),
                title: "Trees and Graphs".into(),
                content: "<p>Understanding tree and graph data structures.</p>".into(),
                resources: vec![resource("r3", "Trees and Graphs Lecture Notes", ResourceType::Pdf, Some("3.2 MB"), None)],
                assignments: vec![assignment(
                    "a2",
                    "Graph Traversal Implementation",
                    "Implement BFS and DFS algorithms for graph traversal.",
                    (2023, 9, 25),
                    20,
                    AssignmentStatus::Active,
                )],
                quiz: None,
            }],
        },
        CourseEntity {
            id: "3".into(),
            title: "Quantum Physics Fundamentals".into(),
            description: "Introduction to the principles of quantum mechanics and its applications.".into(),
            instructor: sarah.clone(),
            cover_image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?q=80&w=2670&auto=format&fit=crop".into(),
            created_at: utc_datetime(2023, 3, 15, 0, 0),
            updated_at: utc_datetime(2023, 6, 10, 0, 0),
            enrolled_students: 65,
            duration: "14 weeks".into(),
            level: CourseLevel::Intermediate,
            modules: vec![CourseModule {
                id: "301".into(),
                title: "Quantum States and Measurements".into(),
                content: "<p>Understanding quantum states and the measurement problem.</p>".into(),
                resources: vec![resource("r4", "Quantum Mechanics Lecture", ResourceType::Video, None, Some("60 minutes"))],
                assignments: vec![assignment(
                    "a3",
                    "Quantum State Analysis",
                    "Analyze given quantum states and predict measurement outcomes.",
                    (2023, 10, 5),
                    15,
                    AssignmentStatus::Upcoming,
                )],
                quiz: None,
            }],
        },
        CourseEntity {
            id: "4".into(),
            title: "Calculus I".into(),
            description: "Introduction to differential and integral calculus with applications.".into(),
            instructor: sarah,
            cover_image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?q=80&w=2670&auto=format&fit=crop".into(),
            created_at: utc_datetime(2023, 4, 20, 0, 0),
            updated_at: utc_datetime(2023, 8, 5, 0, 0),
            enrolled_students: 130,
            duration: "15 weeks".into(),
            level: CourseLevel::Beginner,
            modules: vec![CourseModule {
                id: "401".into(),
                title: "Limits and Continuity".into(),
                content: "<p>Understanding the concept of limits and continuity of functions.</p>".into(),
                resources: vec![resource("r5", "Limits and Continuity Notes", ResourceType::Pdf, Some("2.8 MB"), None)],
                assignments: vec![assignment(
                    "a4",
                    "Limits Problem Set",
                    "Solve the given problems on limits and continuity.",
                    (2023, 9, 30),
                    10,
                    AssignmentStatus::Upcoming,
                )],
                quiz: None,
            }],
        },
    ]
}

pub fn student_assignments() -> Vec<AssignmentEntity> {
    let mut submitted = assignment(
        "a6",
        "Python Libraries Research",
        "Research and present on a Python library of your choice.",
        (2023, 8, 30),
        20,
        AssignmentStatus::Submitted,
    );
    submitted.submission = Some(AssignmentSubmission {
        id: "s1".into(),
        student_id: "1".into(),
        assignment_id: "a6".into(),
        submitted_at: utc_datetime(2023, 8, 29, 0, 0),
        content: "My research on NumPy library and its applications in data science.".into(),
        attachments: vec!["numpy_research.pdf".into()],
        grade: None,
        feedback: None,
    });

    let mut graded = assignment(
        "a7",
        "Algorithm Complexity Analysis",
        "Analyze the time and space complexity of given algorithms.",
        (2023, 8, 25),
        15,
        AssignmentStatus::Graded,
    );
    graded.submission = Some(AssignmentSubmission {
        id: "s2".into(),
        student_id: "1".into(),
        assignment_id: "a7".into(),
        submitted_at: utc_datetime(2023, 8, 24, 0, 0),
        content: "My analysis of the provided algorithms.".into(),
        attachments: vec!["algorithm_analysis.pdf".into()],
        grade: Some(14.0),
        feedback: Some("Excellent analysis! Very clear explanations of the time complexities.".into()),
    });

    vec![
        assignment(
            "a1",
            "Basic Python Syntax",
            "Complete the exercises on basic Python syntax and structures.",
            (2023, 9, 15),
            10,
            AssignmentStatus::Upcoming,
        ),
        assignment(
            "a5",
            "Object-Oriented Programming",
            "Implement a simple class hierarchy demonstrating OOP principles.",
            (2023, 9, 10),
            15,
            AssignmentStatus::Active,
        ),
        submitted,
        graded,
    ]
}

fn notification(
    id: &str,
    user_id: &str,
    title: &str,
    message: &str,
    created_at: (u32, u32, u32, u32),
    read: bool,
    _type: NotificationType,
    link_to: Option<&str>,
) -> NotificationEntity {
    let (month, day, hour, minute) = created_at;
    NotificationEntity {
        id: id.into(),
        user_id: user_id.into(),
        title: title.into(),
        message: message.into(),
        created_at: utc_datetime(2023, month, day, hour, minute),
        read,
        _type,
        link_to: link_to.map(Into::into),
    }
}

pub fn notifications() -> Vec<NotificationEntity> {
    vec![
        notification(
            "n1",
            "1",
            "New Assignment Posted",
            "A new assignment 'Basic Python Syntax' has been posted in Introduction to Programming.",
            (9, 1, 9, 30),
            false,
            NotificationType::Assignment,
            Some("/courses/1/assignments/a1"),
        ),
        notification(
            "n2",
            "1",
            "Assignment Graded",
            "Your assignment 'Algorithm Complexity Analysis' has been graded. You received 14/15 points.",
            (8, 26, 15, 45),
            true,
            NotificationType::Grade,
            Some("/assignments/a7"),
        ),
        notification(
            "n3",
            "1",
            "Upcoming Quiz",
            "Don't forget about the 'Python Basics Quiz' scheduled for next week.",
            (9, 5, 10, 0),
            false,
            NotificationType::Quiz,
            Some("/courses/1/quizzes/q1"),
        ),
        notification(
            "n4",
            "2",
            "New Student Enrollment",
            "5 new students have enrolled in your 'Introduction to Programming' course.",
            (9, 2, 11, 15),
            false,
            NotificationType::Announcement,
            Some("/courses/1/students"),
        ),
        notification(
            "n5",
            "3",
            "System Maintenance",
            "The platform will undergo maintenance on Sunday from 2 AM to 4 AM.",
            (9, 3, 16, 0),
            true,
            NotificationType::Announcement,
            None,
        ),
    ]
}

fn message(
    id: &str,
    sender_id: &str,
    receiver_id: &str,
    content: &str,
    sent_at: (u32, u32, u32),
    read: bool,
) -> MessageEntity {
    let (day, hour, minute) = sent_at;
    MessageEntity {
        id: id.into(),
        sender_id: sender_id.into(),
        receiver_id: receiver_id.into(),
        content: content.into(),
        sent_at: utc_datetime(2023, 9, day, hour, minute),
        read,
    }
}

pub fn messages() -> Vec<MessageEntity> {
    vec![
        message(
            "m1",
            "1",
            "2",
            "Hello Professor, I had a question about the assignment due next week.",
            (2, 14, 30),
            true,
        ),
        message("m2", "2", "1", "Hi John, what's your question?", (2, 15, 0), true),
        message(
            "m3",
            "1",
            "2",
            "I'm having trouble understanding the requirements for the second part of the assignment.",
            (2, 15, 10),
            true,
        ),
        message(
            "m4",
            "2",
            "1",
            "The second part is about implementing a recursive algorithm for the problem. Perhaps we could discuss this during office hours tomorrow?",
            (2, 15, 20),
            false,
        ),
        message(
            "m5",
            "4",
            "2",
            "Professor Smith, will the quiz include content from the optional readings?",
            (3, 10, 45),
            false,
        ),
    ]
}
