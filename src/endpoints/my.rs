//! Data of the authorizing user.
endpoints! {
	/// Endpoints scoped to the authorizing user.
	MY_ENDPOINTS;

	Authenticated Get "/iam/supporting" => iam_supporting / IAM_SUPPORTING [] "IamSupporting";
	Authenticated Get "/my/supporter" => my_supporter / MY_SUPPORTER [] "MySupporter";
	Authenticated Get "/my/stream" => my_stream / MY_STREAM [] "MyStream";
	Authenticated Get "/my/email" => my_email / MY_EMAIL [] "MyEmail";
	Authenticated Get "/my/birth_date" => my_birth_date / MY_BIRTH_DATE [] "MyBirthDate";

	/// Profile of the authorizing user.
	Authenticated Get "/my/info" => my_info / MY_INFO [] "MyInfo";

	Authenticated Get "/my/channels" => my_channels / MY_CHANNELS [] "MyChannels";
	Authenticated Get "/my/notifications" => my_notifications / MY_NOTIFICATIONS [] "MyNotifications";
	Authenticated Get "/my/blocked_users" => my_blocked_users / MY_BLOCKED_USERS [] "MyBlockedUsers";
	Authenticated Get "/my/blocked_channels" => my_blocked_channels / MY_BLOCKED_CHANNELS [] "MyBlockedChannels";
	Authenticated Get "/my/dialogue" => my_dialogue / MY_DIALOGUE [] "MyDialogue";

	/// Unread notification counters.
	Authenticated Get "/my/notif" => my_notif / MY_NOTIF [] "MyNotif";
}
