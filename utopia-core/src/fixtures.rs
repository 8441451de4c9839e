//! Sample collections used to seed the in-memory stores and by tests.
//! Every call builds fresh values; nothing is shared between callers.

use crate::{Passenger, Payment, PaymentStatus};

pub fn payment() -> Payment {
    Payment {
        payment_id: 1,
        payment_booking_uuid: "fa0ff7db-c2da-40bd-ba21-1d7e81faa24a".to_string(),
        payment_stripe_uuid: "a2bf6dd9-b296-4e03-b1ee-55acfd1c196d".to_string(),
        payment_status: PaymentStatus::Confirmed,
    }
}

pub fn payments() -> Vec<Payment> {
    use PaymentStatus::*;

    let rows = [
        (2, "805eb045-d3fd-456c-8f07-d07af6ef7baf", "42b99e9a-e2d4-409c-a273-dd539c7e865a", Confirmed),
        (3, "f52e2558-eebd-4e04-bd74-60a4f8f48053", "2fb2a531-b69a-4067-a6b2-e8861945525a", Confirmed),
        (4, "973bd42d-2c14-4853-9aa1-5e0a60eee1e1", "29919f66-b740-4380-9dd9-6cf7a538ec2a", Confirmed),
        (5, "75db2444-51f1-46c9-beb0-7565d3e0a217", "c5c55359-a7ac-4d88-a754-56dd7e909d01", Pending),
        (6, "f29fca39-8ce0-4c84-9519-23795c8dc661", "b43092c3-4e61-4545-962d-4425b673dcd3", Pending),
        (7, "79abad2a-baa3-4b2a-9371-6a4e63c76213", "6ea55da2-6324-4833-a0c7-46f37c594b4f", Pending),
        (8, "ec980a29-4903-4075-a900-cb688cf8ffa5", "2516f0a1-96b0-4457-b978-9aecd9e661d2", Pending),
        (9, "38d85c66-2a58-4608-9cbb-a27769b9e95f", "7749569a-d956-497b-ae9c-42f1427a005f", Rejected),
    ];

    std::iter::once(payment())
        .chain(rows.into_iter().map(|(id, booking, stripe, status)| Payment {
            payment_id: id,
            payment_booking_uuid: booking.to_string(),
            payment_stripe_uuid: stripe.to_string(),
            payment_status: status,
        }))
        .collect()
}

pub fn passenger() -> Passenger {
    Passenger {
        passenger_id: 1,
        passenger_booking_id: 6,
        passenger_passport_id: "AFHAJKFHKAJS".to_string(),
        passenger_first_name: "FirstName1".to_string(),
        passenger_last_name: "LastName1".to_string(),
        passenger_date_of_birth: "1987-3-14".to_string(),
        passenger_sex: "MALE".to_string(),
        passenger_address: "2342 Water Lane 4291 RockCity Virginia".to_string(),
        passenger_is_veteran: true,
    }
}

pub fn passengers() -> Vec<Passenger> {
    let rows = [
        (2, 7, "bhdjkHKKKAJS", "1988-1-9", "MALE", "8880 Woodsman Street Marquette, MI 49855", false),
        (3, 8, "UOIUHKJAHSAS", "1989-7-3", "FEMALE", "530 Homestead Rd. North Miami Beach, FL 33160", false),
        (4, 9, "WYTWHJKASFHJ", "1988-1-9", "MALE", "75 Amherst Dr. Raleigh, NC 27603", false),
        (5, 10, "PIPOIMBJJSSJ", "2003-7-3", "FEMALE", "495 Henry Smith Road Rowlett, TX 75088", false),
        (6, 11, "RTYCGZNCBCCC", "1956-1-9", "MALE", "107 Greenrose St. Brownsburg, IN 46112", true),
        (7, 12, "MOKJOIASJKHD", "1972-7-3", "FEMALE", "9329 West Lakeshore St. Parkville, MD 21234", true),
        (8, 13, "UIASHASJKKZC", "1994-1-9", "MALE", "8109 Jefferson Drive Holland, MI 49423", false),
        (9, 14, "QQWASNDAJSDK", "2011-7-3", "FEMALE", "670 Gartner Dr. Shakopee, MN 55379", false),
    ];

    std::iter::once(passenger())
        .chain(rows.into_iter().map(|(id, booking_id, passport, dob, sex, address, veteran)| Passenger {
            passenger_id: id,
            passenger_booking_id: booking_id,
            passenger_passport_id: passport.to_string(),
            passenger_first_name: format!("FirstName{}", id),
            passenger_last_name: format!("LastName{}", id),
            passenger_date_of_birth: dob.to_string(),
            passenger_sex: sex.to_string(),
            passenger_address: address.to_string(),
            passenger_is_veteran: veteran,
        }))
        .collect()
}
